/// UI languages and the static translation tables

use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }

    /// Language name the model is asked to answer in
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct BiasSliderLabels {
    pub left: &'static str,
    pub center: &'static str,
    pub right: &'static str,
}

/// All visible UI strings for one language
#[derive(Debug, PartialEq)]
pub struct Translations {
    pub title: &'static str,
    pub tagline: &'static str,
    pub input_placeholder: &'static str,
    pub get_perspectives_button: &'static str,
    pub analyzing_button: &'static str,
    pub left_perspective_heading: &'static str,
    pub right_perspective_heading: &'static str,
    pub article_summary_heading: &'static str,
    pub history_heading: &'static str,
    pub history_empty: &'static str,
    pub error_heading: &'static str,
    pub fetch_error: &'static str,
    pub parse_error: &'static str,
    pub network_error: &'static str,
    pub url_fetch_error: &'static str,
    pub footer_text: &'static str,
    pub language_label: &'static str,
    pub english_option: &'static str,
    pub chinese_option: &'static str,
    pub bias_slider: BiasSliderLabels,
}

static EN: Translations = Translations {
    title: "Bias Check",
    tagline: "Enter any topic or article URL to get summarized viewpoints from both left-leaning and right-leaning perspectives, helping you combat information bias.",
    input_placeholder: "e.g., 'climate change policy' or paste an article URL",
    get_perspectives_button: "Get Perspectives",
    analyzing_button: "Analyzing...",
    left_perspective_heading: "Left Perspective",
    right_perspective_heading: "Right Perspective",
    article_summary_heading: "Article Summary",
    history_heading: "Analysis History",
    history_empty: "No analyses yet.",
    error_heading: "Error!",
    fetch_error: "Failed to get a valid response from the AI. Please try again.",
    parse_error: "Failed to understand the data from the AI. The AI may not have provided the perspectives in the correct format. Showing the raw response below.",
    network_error: "An error occurred: {{message}}. Please check your network connection or try again later.",
    url_fetch_error: "Failed to fetch content from the provided URL. Please check the URL and try again.",
    footer_text: "Built with GenAI to promote balanced understanding.",
    language_label: "Language:",
    english_option: "English",
    chinese_option: "中文",
    bias_slider: BiasSliderLabels {
        left: "Left",
        center: "Center",
        right: "Right",
    },
};

static ZH: Translations = Translations {
    title: "兼听则明",
    tagline: "输入任何主题或文章网址，即可获取左翼和右翼观点的总结，助您消除信息偏见。",
    input_placeholder: "例如：'气候变化政策' 或 粘贴文章网址",
    get_perspectives_button: "获取观点",
    analyzing_button: "分析中...",
    left_perspective_heading: "左翼观点",
    right_perspective_heading: "右翼观点",
    article_summary_heading: "文章摘要",
    history_heading: "分析历史",
    history_empty: "暂无分析记录。",
    error_heading: "错误！",
    fetch_error: "未能从AI获取有效响应。请重试。",
    parse_error: "未能理解来自AI的数据。 AI可能未能正确提供观点。下面显示原始响应。",
    network_error: "发生错误：{{message}}。请检查您的网络连接或稍后再试。",
    url_fetch_error: "无法从提供的网址获取内容。请检查网址后重试。",
    footer_text: "由GenAI构建，旨在促进平衡理解。",
    language_label: "语言：",
    english_option: "英语",
    chinese_option: "中文",
    bias_slider: BiasSliderLabels {
        left: "左",
        center: "中",
        right: "右",
    },
};

pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::English => &EN,
        Language::Chinese => &ZH,
    }
}

/// Fill the `{{message}}` placeholder of the network error text
pub fn network_error_message(t: &Translations, message: &str) -> String {
    t.network_error.replace("{{message}}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_chinese() {
        assert_eq!(Language::default(), Language::Chinese);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::English.toggle(), Language::Chinese);
        assert_eq!(Language::Chinese.toggle(), Language::English);
        assert_eq!(Language::English.toggle().toggle(), Language::English);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Chinese.code(), "zh");
    }

    #[test]
    fn test_prompt_name() {
        assert_eq!(Language::Chinese.prompt_name(), "Chinese");
        assert_eq!(Language::English.prompt_name(), "English");
    }

    #[test]
    fn test_tables_differ() {
        let en = translations(Language::English);
        let zh = translations(Language::Chinese);

        assert_eq!(en.title, "Bias Check");
        assert_eq!(zh.title, "兼听则明");
        assert_ne!(en.get_perspectives_button, zh.get_perspectives_button);
        assert_ne!(en.bias_slider.center, zh.bias_slider.center);
    }

    #[test]
    fn test_network_error_message() {
        let en = translations(Language::English);
        assert_eq!(
            network_error_message(en, "timeout"),
            "An error occurred: timeout. Please check your network connection or try again later."
        );

        let zh = translations(Language::Chinese);
        assert!(network_error_message(zh, "超时").starts_with("发生错误：超时。"));
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(lang, Language::Chinese);
    }
}
