/// Classification of user input into topics and article URLs
use regex::Regex;
use std::sync::OnceLock;

/// Default CORS proxy used to fetch article HTML from the browser
pub const DEFAULT_CORS_PROXY: &str = "https://corsproxy.io/?";

/// What the user asked us to analyze
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisInput {
    Topic(String),
    Article { url: String },
}

impl AnalysisInput {
    pub fn is_article(&self) -> bool {
        matches!(self, AnalysisInput::Article { .. })
    }

    /// The text the user typed, as stored in history
    pub fn as_str(&self) -> &str {
        match self {
            AnalysisInput::Topic(topic) => topic,
            AnalysisInput::Article { url } => url,
        }
    }
}

fn url_regex() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| {
        Regex::new(r"(?i-u)^(https?://)?([\w.-]+)\.([a-z]{2,6}\.?)(/[\w.-]*)*/?$")
            .expect("URL pattern is valid")
    })
}

/// Check whether the input looks like an article URL
///
/// Accepts an optional http(s) scheme, a dotted host with a 2-6 letter TLD,
/// and a path made of ASCII word characters, dots and dashes. Query strings and
/// fragments are not matched, so such inputs are analyzed as topics.
pub fn is_url(input: &str) -> bool {
    url_regex().is_match(input)
}

/// Trim the input and decide whether it is a topic or an article URL
pub fn classify(input: &str) -> AnalysisInput {
    let trimmed = input.trim();
    if is_url(trimmed) {
        AnalysisInput::Article {
            url: trimmed.to_string(),
        }
    } else {
        AnalysisInput::Topic(trimmed.to_string())
    }
}

/// Build the proxied fetch URL, percent-encoding the target like `encodeURIComponent`
pub fn proxy_url(proxy_base: &str, target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{}{}", proxy_base, encoded)
}
