/// Parsing and validation of the model's JSON reply
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BIAS_SCORE_MIN: f64 = -100.0;
pub const BIAS_SCORE_MAX: f64 = 100.0;

/// A validated left/right analysis
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub article_summary: String,
    pub bias_score: Option<f64>,
    pub left_perspective: String,
    pub right_perspective: String,
}

/// JavaScript-style truthiness, which is what the reply is validated against
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn summary_of(perspective: &Value) -> String {
    perspective
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Parse the model's text and check that both perspectives are present
///
/// Missing summaries become empty strings, a missing bias score becomes
/// `None` and a present one is clamped to [-100, 100].
pub fn parse_analysis(json_text: &str) -> Result<AnalysisResult, AnalysisError> {
    let parse_error = |reason: String| AnalysisError::Parse {
        raw: json_text.to_string(),
        reason,
    };

    let data: Value = serde_json::from_str(json_text).map_err(|e| parse_error(e.to_string()))?;

    let object = data
        .as_object()
        .ok_or_else(|| parse_error("response is not a JSON object".to_string()))?;

    let (left, right) = match (object.get("leftPerspective"), object.get("rightPerspective")) {
        (Some(left), Some(right)) if is_truthy(left) && is_truthy(right) => (left, right),
        _ => {
            return Err(parse_error(
                "Parsed JSON does not contain the expected properties.".to_string(),
            ));
        }
    };

    Ok(AnalysisResult {
        article_summary: object
            .get("articleSummary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        bias_score: object
            .get("biasScore")
            .and_then(Value::as_f64)
            .map(|score| score.clamp(BIAS_SCORE_MIN, BIAS_SCORE_MAX)),
        left_perspective: summary_of(left),
        right_perspective: summary_of(right),
    })
}
