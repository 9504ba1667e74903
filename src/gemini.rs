/// HTTP client for the generative-language API and the article proxy
use crate::article::extract_article_text;
use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::input::proxy_url;
use crate::prompt::{Content, GenerateContentRequest};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// The subset of a generateContent reply we read
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}

/// Pull the candidate text out of a raw reply body
pub fn extract_candidate_text(body: &str) -> Result<String, AnalysisError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|_| AnalysisError::InvalidResponse)?;

    response
        .first_text()
        .map(str::to_string)
        .ok_or(AnalysisError::InvalidResponse)
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    cors_proxy: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        log::info!(
            "Initialized GeminiClient: model={}, endpoint={}",
            config.gemini_model,
            config.gemini_endpoint
        );
        Self {
            client: Client::new(),
            endpoint: config.gemini_endpoint.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
            cors_proxy: config.cors_proxy.clone(),
        }
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    /// Send one generateContent call and return the candidate text
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String, AnalysisError> {
        let response = self
            .client
            .post(self.generate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Network(format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        extract_candidate_text(&body)
    }

    /// Fetch an article through the CORS proxy and reduce it to plain text
    pub async fn fetch_article_text(&self, url: &str) -> Result<String, AnalysisError> {
        let response = self
            .client
            .get(proxy_url(&self.cors_proxy, url))
            .send()
            .await
            .map_err(|e| AnalysisError::UrlFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::UrlFetch(format!(
                "Network response was not ok, status: {}",
                status.as_u16()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AnalysisError::UrlFetch(e.to_string()))?;

        Ok(extract_article_text(&html))
    }
}
