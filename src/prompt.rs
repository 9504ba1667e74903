/// Prompt templates, response schemas and the generateContent request body
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Which response shape the model is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// Left and right perspectives only
    Topic,
    /// Perspectives plus article summary and bias score
    Article,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Body of a `models/{model}:generateContent` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn new(prompt: String, kind: SchemaKind) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(kind),
            },
        }
    }
}

fn perspective_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "summary": { "type": "STRING" } },
        "required": ["summary"]
    })
}

/// JSON schema the model must follow for the given input kind
pub fn response_schema(kind: SchemaKind) -> Value {
    match kind {
        SchemaKind::Topic => json!({
            "type": "OBJECT",
            "properties": {
                "leftPerspective": perspective_schema(),
                "rightPerspective": perspective_schema(),
            },
            "required": ["leftPerspective", "rightPerspective"]
        }),
        SchemaKind::Article => json!({
            "type": "OBJECT",
            "properties": {
                "articleSummary": { "type": "STRING" },
                "biasScore": { "type": "NUMBER" },
                "leftPerspective": perspective_schema(),
                "rightPerspective": perspective_schema(),
            },
            "required": ["articleSummary", "biasScore", "leftPerspective", "rightPerspective"]
        }),
    }
}

pub fn topic_prompt(topic: &str, lang: Language) -> String {
    let language = lang.prompt_name();
    format!(
        "
Act as an expert political analyst. Your task is to provide a balanced overview of the topic \"{topic}\" from both left-leaning and right-leaning perspectives, in {language}.

Write a distinct summary for each perspective. The summary should reflect the key points, arguments, and tone you would expect to find for each side regarding \"{topic}\".

Your final output must be a single JSON object adhering to the specified schema. Do not include any other text or explanation outside of the JSON object."
    )
}

pub fn article_prompt(article_text: &str, lang: Language) -> String {
    let language = lang.prompt_name();
    format!(
        "
Act as an expert political analyst. The following is the text content of an article. Your tasks are:
1. Provide a concise, neutral summary of the article's main points.
2. Analyze the article for political bias and provide a score from -100 (strongly left-leaning) to 100 (strongly right-leaning), where 0 represents a neutral view.
3. Analyze the article's content and provide a balanced summary of the key arguments from both a left-leaning and a right-leaning perspective.

All parts of your response must be in {language}.

Article Text: \"{article_text}\"

Your final output must be a single JSON object adhering to the specified schema. Do not include any other text or explanation outside of the JSON object."
    )
}
