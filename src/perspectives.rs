/// One full analysis: classify, optionally scrape, prompt, parse
use crate::analysis::{AnalysisResult, parse_analysis};
use crate::error::AnalysisError;
use crate::gemini::GeminiClient;
use crate::i18n::Language;
use crate::input::AnalysisInput;
use crate::prompt::{GenerateContentRequest, SchemaKind, article_prompt, topic_prompt};

/// Build the generateContent request for a topic or already-extracted article text
pub fn build_request(input: &AnalysisInput, article_text: Option<&str>, lang: Language) -> GenerateContentRequest {
    match input {
        AnalysisInput::Topic(topic) => {
            GenerateContentRequest::new(topic_prompt(topic, lang), SchemaKind::Topic)
        }
        AnalysisInput::Article { .. } => GenerateContentRequest::new(
            article_prompt(article_text.unwrap_or_default(), lang),
            SchemaKind::Article,
        ),
    }
}

pub async fn fetch_perspectives(
    client: &GeminiClient,
    input: &AnalysisInput,
    lang: Language,
) -> Result<AnalysisResult, AnalysisError> {
    log::debug!("Analyzing {} in {}", if input.is_article() { "article" } else { "topic" }, lang.prompt_name());

    let article_text = match input {
        AnalysisInput::Article { url } => {
            let text = client.fetch_article_text(url).await.inspect_err(|e| {
                log::error!("URL fetch error: {}", e);
            })?;
            log::debug!("Fetched {} characters of article text", text.chars().count());
            Some(text)
        }
        AnalysisInput::Topic(_) => None,
    };

    let request = build_request(input, article_text.as_deref(), lang);

    let json_text = client.generate(&request).await.inspect_err(|e| {
        log::error!("AI request failed: {}", e);
    })?;

    parse_analysis(&json_text).inspect_err(|e| {
        log::error!("Failed to parse or validate AI JSON response: {}", e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::classify;

    #[test]
    fn test_topic_request_uses_topic_schema() {
        let request = build_request(&classify("climate policy"), None, Language::English);
        let body = serde_json::to_value(&request).unwrap();

        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("\"climate policy\""));
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            serde_json::json!(["leftPerspective", "rightPerspective"])
        );
    }

    #[test]
    fn test_article_request_embeds_text_not_url() {
        let input = classify("https://example.com/a");
        let request = build_request(&input, Some("Body of the article"), Language::Chinese);
        let prompt = &request.contents[0].parts[0].text;

        assert!(prompt.contains("Article Text: \"Body of the article\""));
        assert!(!prompt.contains("https://example.com/a"));
        assert!(prompt.contains("in Chinese"));
        assert!(request.generation_config.response_schema["properties"]
            .get("biasScore")
            .is_some());
    }
}
