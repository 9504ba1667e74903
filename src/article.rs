/// Plain-text extraction from fetched article HTML
use regex::Regex;
use std::sync::OnceLock;

/// Article text is cut to this many characters before it goes into the prompt
pub const MAX_ARTICLE_CHARS: usize = 5000;

struct Patterns {
    script_style: Regex,
    comment: Regex,
    tag: Regex,
    entity: Regex,
    whitespace_run: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        script_style: Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>")
            .expect("script/style pattern is valid"),
        comment: Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"),
        tag: Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"),
        entity: Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);")
            .expect("entity pattern is valid"),
        whitespace_run: Regex::new(r"\s\s+").expect("whitespace pattern is valid"),
    })
}

/// Extract readable text from raw HTML
///
/// Steps:
/// 1. Drop `<script>` and `<style>` elements with their content
/// 2. Drop comments and every remaining tag
/// 3. Decode common entities
/// 4. Collapse runs of two or more whitespace characters into one space
/// 5. Trim and cut to [`MAX_ARTICLE_CHARS`] characters
pub fn extract_article_text(html: &str) -> String {
    let p = patterns();

    let without_code = p.script_style.replace_all(html, " ");
    let without_comments = p.comment.replace_all(&without_code, " ");
    let text = p.tag.replace_all(&without_comments, "");
    let decoded = decode_entities(&text);
    let collapsed = p.whitespace_run.replace_all(&decoded, " ");

    truncate_chars(collapsed.trim(), MAX_ARTICLE_CHARS)
}

fn decode_entities(text: &str) -> String {
    patterns()
        .entity
        .replace_all(text, |caps: &regex::Captures| {
            let body = &caps[1];
            let decoded = match body.strip_prefix('#') {
                Some(numeric) => {
                    let code = match numeric.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => numeric.parse::<u32>().ok(),
                    };
                    code.and_then(char::from_u32)
                }
                None => match body {
                    "nbsp" => Some(' '),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "amp" => Some('&'),
                    _ => None,
                },
            };
            decoded
                .map(|c| c.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
