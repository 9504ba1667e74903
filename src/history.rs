/// Per-user analysis history records

use crate::analysis::AnalysisResult;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Firestore collection holding a user's history
pub fn collection_path(uid: &str) -> String {
    format!("users/{}/history", uid)
}

/// A persisted past analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    #[serde(default)]
    pub id: String,
    pub topic: String,
    #[serde(default)]
    pub article_summary: String,
    #[serde(default)]
    pub bias_score: Option<f64>,
    #[serde(default)]
    pub left_perspective: String,
    #[serde(default)]
    pub right_perspective: String,
    #[serde(default)]
    pub language: Language,
    /// Milliseconds since the epoch; pending server writes may not have one yet
    #[serde(default)]
    pub created_at: Option<f64>,
}

impl HistoryRecord {
    pub fn new(id: String, topic: &str, result: &AnalysisResult, language: Language, created_at: f64) -> Self {
        HistoryRecord {
            id,
            topic: topic.to_string(),
            article_summary: result.article_summary.clone(),
            bias_score: result.bias_score,
            left_perspective: result.left_perspective.clone(),
            right_perspective: result.right_perspective.clone(),
            language,
            created_at: Some(created_at),
        }
    }

    /// Convert to a plain JS object for Firestore
    ///
    /// Firestore rejects `undefined` fields, so missing values become `null`.
    pub fn to_js(&self) -> Result<JsValue, serde_wasm_bindgen::Error> {
        self.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
    }
}

/// History list as last delivered by the subscription, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryList {
    pub records: Vec<HistoryRecord>,
}

impl HistoryList {
    pub fn new() -> Self {
        HistoryList {
            records: Vec::new(),
        }
    }

    /// Replace the list with a snapshot, newest first
    ///
    /// Records without a timestamp sort first, as they are local writes the
    /// server has not stamped yet.
    pub fn from_snapshot(mut records: Vec<HistoryRecord>) -> Self {
        records.sort_by(|a, b| {
            let a = a.created_at.unwrap_or(f64::INFINITY);
            let b = b.created_at.unwrap_or(f64::INFINITY);
            b.total_cmp(&a)
        });
        HistoryList { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(id: &str, created_at: Option<f64>) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            topic: format!("topic {}", id),
            article_summary: String::new(),
            bias_score: None,
            left_perspective: "L".to_string(),
            right_perspective: "R".to_string(),
            language: Language::English,
            created_at,
        }
    }

    #[test]
    fn test_collection_path() {
        assert_eq!(collection_path("abc123"), "users/abc123/history");
    }

    #[test]
    fn test_record_from_result() {
        let result = AnalysisResult {
            article_summary: "S".to_string(),
            bias_score: Some(20.0),
            left_perspective: "L".to_string(),
            right_perspective: "R".to_string(),
        };

        let record = HistoryRecord::new(
            "id-1".to_string(),
            "https://example.com/a",
            &result,
            Language::Chinese,
            1698508200000.0,
        );

        assert_eq!(record.topic, "https://example.com/a");
        assert_eq!(record.bias_score, Some(20.0));
        assert_eq!(record.language, Language::Chinese);
        assert_eq!(record.created_at, Some(1698508200000.0));
    }

    #[test]
    fn test_snapshot_sorted_newest_first() {
        let list = HistoryList::from_snapshot(vec![
            create_test_record("old", Some(1.0)),
            create_test_record("new", Some(3.0)),
            create_test_record("mid", Some(2.0)),
        ]);

        let ids: Vec<&str> = list.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_pending_record_sorts_first() {
        let list = HistoryList::from_snapshot(vec![
            create_test_record("stamped", Some(5.0)),
            create_test_record("pending", None),
        ]);

        assert_eq!(list.records[0].id, "pending");
    }

    #[test]
    fn test_len() {
        let list = HistoryList::from_snapshot(vec![create_test_record("a", Some(1.0))]);

        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        assert!(HistoryList::new().is_empty());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let record = create_test_record("a", Some(10.0));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["leftPerspective"], "L");
        assert_eq!(json["createdAt"], 10.0);
        assert_eq!(json["language"], "en");
    }

    #[test]
    fn test_deserialize_sparse_document() {
        let record: HistoryRecord =
            serde_json::from_str(r#"{"id": "x", "topic": "tax", "biasScore": null}"#).unwrap();

        assert_eq!(record.topic, "tax");
        assert_eq!(record.bias_score, None);
        assert_eq!(record.created_at, None);
        assert_eq!(record.language, Language::Chinese);
    }
}
