/// View state of the app and the actions that change it
use crate::analysis::AnalysisResult;
use crate::error::AnalysisError;
use crate::history::{HistoryList, HistoryRecord};
use crate::i18n::{Language, Translations, translations};
use std::rc::Rc;
use yew::prelude::*;

pub const RAW_RESPONSE_PREFIX: &str = "Raw AI Response (failed to parse):\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub language: Language,
    pub topic: String,
    pub status: RequestStatus,
    /// Id of the newest submitted request; replies for older ids are dropped
    pub request_id: u64,
    pub result: AnalysisResult,
    pub error: Option<AnalysisError>,
    pub history: HistoryList,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetTopic(String),
    ToggleLanguage,
    Submit { request_id: u64 },
    Succeeded { request_id: u64, result: AnalysisResult },
    Failed { request_id: u64, error: AnalysisError },
    SignedIn(String),
    SignedOut,
    HistoryUpdated(Vec<HistoryRecord>),
}

/// Hands out request ids and remembers the newest one
///
/// Lives outside the reducer so async tasks can check, after their reply
/// arrives, whether a newer submit has replaced them.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.latest
    }
}

impl AppState {
    pub fn translations(&self) -> &'static Translations {
        translations(self.language)
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.topic.trim().is_empty()
    }

    /// Banner text for the current error, in the current language
    pub fn error_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|e| e.user_message(self.translations()))
    }

    pub fn has_perspectives(&self) -> bool {
        !self.result.left_perspective.is_empty() || !self.result.right_perspective.is_empty()
    }

    fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::SetTopic(topic) => self.topic = topic,
            AppAction::ToggleLanguage => self.language = self.language.toggle(),
            AppAction::Submit { request_id } => {
                if !self.can_submit() {
                    return;
                }
                self.request_id = request_id;
                self.status = RequestStatus::Loading;
                self.result = AnalysisResult::default();
                self.error = None;
            }
            AppAction::Succeeded { request_id, result } => {
                if request_id != self.request_id {
                    log::debug!("Dropping stale reply for request {}", request_id);
                    return;
                }
                self.status = RequestStatus::Idle;
                self.result = result;
                self.error = None;
            }
            AppAction::Failed { request_id, error } => {
                if request_id != self.request_id {
                    log::debug!("Dropping stale failure for request {}", request_id);
                    return;
                }
                self.status = RequestStatus::Idle;
                self.result = match error.raw_response() {
                    Some(raw) => AnalysisResult {
                        left_perspective: format!("{}{}", RAW_RESPONSE_PREFIX, raw),
                        ..AnalysisResult::default()
                    },
                    None => AnalysisResult::default(),
                };
                self.error = Some(error);
            }
            AppAction::SignedIn(uid) => {
                if self.uid.as_deref() != Some(uid.as_str()) {
                    self.history = HistoryList::new();
                }
                self.uid = Some(uid);
            }
            AppAction::SignedOut => {
                self.uid = None;
                self.history = HistoryList::new();
            }
            AppAction::HistoryUpdated(records) => {
                self.history = HistoryList::from_snapshot(records);
            }
        }
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Reducible;

    fn reduce_all(actions: Vec<AppAction>) -> Rc<AppState> {
        actions
            .into_iter()
            .fold(Rc::new(AppState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn test_request_tracker_only_newest_is_current() {
        let mut tracker = RequestTracker::default();

        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_stale_success_is_neither_shown_nor_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        let state = reduce_all(vec![
            AppAction::SetTopic("climate".into()),
            AppAction::Submit { request_id: second },
            AppAction::Succeeded {
                request_id: first,
                result: sample_result(),
            },
        ]);

        assert!(state.is_loading());
        assert_eq!(state.result, AnalysisResult::default());
        assert!(!tracker.is_current(first));
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            article_summary: String::new(),
            bias_score: None,
            left_perspective: "Left view".to_string(),
            right_perspective: "Right view".to_string(),
        }
    }

    #[test]
    fn test_submit_requires_topic() {
        let state = reduce_all(vec![
            AppAction::SetTopic("   ".to_string()),
            AppAction::Submit { request_id: 1 },
        ]);

        assert!(!state.is_loading());
        assert_eq!(state.request_id, 0);
    }

    #[test]
    fn test_submit_clears_previous_results() {
        let state = reduce_all(vec![
            AppAction::SetTopic("tax".to_string()),
            AppAction::Submit { request_id: 1 },
            AppAction::Failed { request_id: 1, error: AnalysisError::InvalidResponse },
            AppAction::Submit { request_id: 2 },
        ]);

        assert!(state.is_loading());
        assert!(state.error.is_none());
        assert!(!state.has_perspectives());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_success_populates_panels_and_clears_error() {
        let state = reduce_all(vec![
            AppAction::SetTopic("tax".to_string()),
            AppAction::Submit { request_id: 1 },
            AppAction::Failed { request_id: 1, error: AnalysisError::InvalidResponse },
            AppAction::Submit { request_id: 2 },
            AppAction::Succeeded { request_id: 2, result: sample_result() },
        ]);

        assert_eq!(state.result.left_perspective, "Left view");
        assert_eq!(state.result.right_perspective, "Right view");
        assert!(state.error.is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_parse_failure_shows_raw_text_in_left_panel() {
        let raw = r#"{"leftPerspective":{"summary":"only left"}}"#;
        let error = crate::analysis::parse_analysis(raw).unwrap_err();

        let state = reduce_all(vec![
            AppAction::SetTopic("tax".to_string()),
            AppAction::Submit { request_id: 1 },
            AppAction::Failed { request_id: 1, error },
        ]);

        assert_eq!(
            state.error_message().as_deref(),
            Some(state.translations().parse_error)
        );
        assert_eq!(
            state.result.left_perspective,
            format!("Raw AI Response (failed to parse):\n{}", raw)
        );
        assert_eq!(state.result.right_perspective, "");
    }

    #[test]
    fn test_stale_reply_is_ignored() {
        let state = reduce_all(vec![
            AppAction::SetTopic("tax".to_string()),
            AppAction::Submit { request_id: 1 },
            AppAction::Succeeded { request_id: 0, result: sample_result() },
        ]);

        assert!(state.is_loading());
        assert!(!state.has_perspectives());
    }

    #[test]
    fn test_toggle_language_keeps_input_and_results() {
        let state = reduce_all(vec![
            AppAction::SetTopic("immigration".to_string()),
            AppAction::Submit { request_id: 1 },
            AppAction::Failed {
                request_id: 1,
                error: AnalysisError::Network("offline".to_string()),
            },
        ]);
        let zh_message = state.error_message().unwrap();
        assert_eq!(state.translations().title, "兼听则明");

        let toggled = state.reduce(AppAction::ToggleLanguage);

        assert_eq!(toggled.language, Language::English);
        assert_eq!(toggled.topic, "immigration");
        assert_eq!(toggled.translations().title, "Bias Check");
        let en_message = toggled.error_message().unwrap();
        assert_ne!(zh_message, en_message);
        assert!(en_message.contains("offline"));
    }

    #[test]
    fn test_history_snapshot_and_sign_out() {
        let record = HistoryRecord::new(
            "r1".to_string(),
            "tax",
            &sample_result(),
            Language::English,
            1.0,
        );

        let state = reduce_all(vec![
            AppAction::SignedIn("uid-1".to_string()),
            AppAction::HistoryUpdated(vec![record]),
        ]);
        assert_eq!(state.uid.as_deref(), Some("uid-1"));
        assert_eq!(state.history.len(), 1);

        let state = state.reduce(AppAction::SignedOut);
        assert!(state.uid.is_none());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_unchanged_state_keeps_same_rc() {
        let state = Rc::new(AppState::default());
        let same = state.clone().reduce(AppAction::Submit { request_id: 1 });
        assert!(Rc::ptr_eq(&state, &same));
    }
}
