/// Failures of one analysis request
use crate::i18n::{Translations, network_error_message};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("failed to fetch article: {0}")]
    UrlFetch(String),

    #[error("{0}")]
    Network(String),

    #[error("AI response has no candidate content")]
    InvalidResponse,

    #[error("failed to parse AI response: {reason}")]
    Parse { raw: String, reason: String },
}

impl AnalysisError {
    /// Banner text for this error in the given UI language
    pub fn user_message(&self, t: &Translations) -> String {
        match self {
            AnalysisError::UrlFetch(_) => t.url_fetch_error.to_string(),
            AnalysisError::Network(message) => network_error_message(t, message),
            AnalysisError::InvalidResponse => t.fetch_error.to_string(),
            AnalysisError::Parse { .. } => t.parse_error.to_string(),
        }
    }

    /// Raw model output to show in place of the left perspective
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AnalysisError::Parse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
