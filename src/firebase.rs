/// Anonymous auth and realtime history through the Firebase JS bridge

use crate::config::FirebaseConfig;
use crate::history::{HistoryRecord, collection_path};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/firebase.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn initFirebase(config: JsValue) -> Result<(), JsValue>;

    fn onAuthChanged(callback: &js_sys::Function) -> js_sys::Function;

    #[wasm_bindgen(catch)]
    async fn signInAnonymously() -> Result<JsValue, JsValue>;

    fn subscribeHistory(
        path: &str,
        on_snapshot: &js_sys::Function,
        on_error: &js_sys::Function,
    ) -> js_sys::Function;

    #[wasm_bindgen(catch)]
    async fn addHistoryRecord(path: &str, id: &str, record: JsValue) -> Result<(), JsValue>;
}

/// The signed-in Firebase user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// A live listener; dropping it unsubscribes and frees the callbacks
pub struct Subscription {
    unsubscribe: js_sys::Function,
    _callbacks: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Err(e) = self.unsubscribe.call0(&JsValue::NULL) {
            log::warn!("Failed to unsubscribe: {:?}", e);
        }
    }
}

pub fn init(config: &FirebaseConfig) -> Result<(), String> {
    let config_js = serde_wasm_bindgen::to_value(config)
        .map_err(|e| format!("Failed to serialize Firebase config: {:?}", e))?;

    initFirebase(config_js).map_err(|e| format!("Failed to initialize Firebase: {:?}", e))
}

/// Watch the auth state; the callback gets `None` while signed out
pub fn watch_auth(on_user: impl Fn(Option<AuthUser>) + 'static) -> Subscription {
    let callback = Closure::wrap(Box::new(move |user_js: JsValue| {
        if user_js.is_null() || user_js.is_undefined() {
            on_user(None);
            return;
        }
        match serde_wasm_bindgen::from_value::<AuthUser>(user_js) {
            Ok(user) => on_user(Some(user)),
            Err(e) => log::error!("Failed to parse auth user: {:?}", e),
        }
    }) as Box<dyn FnMut(JsValue)>);

    let unsubscribe = onAuthChanged(callback.as_ref().unchecked_ref());

    Subscription {
        unsubscribe,
        _callbacks: vec![callback],
    }
}

pub async fn sign_in_anonymously() -> Result<AuthUser, String> {
    let user_js = signInAnonymously()
        .await
        .map_err(|e| format!("Anonymous sign-in failed: {:?}", e))?;

    serde_wasm_bindgen::from_value(user_js).map_err(|e| format!("Failed to parse auth user: {:?}", e))
}

/// Subscribe to `users/{uid}/history`; each snapshot is delivered whole
pub fn subscribe_history(uid: &str, on_snapshot: impl Fn(Vec<HistoryRecord>) + 'static) -> Subscription {
    let path = collection_path(uid);
    log::debug!("Subscribing to {}", path);

    let snapshot_callback = Closure::wrap(Box::new(move |records_js: JsValue| {
        match serde_wasm_bindgen::from_value::<Vec<HistoryRecord>>(records_js) {
            Ok(records) => on_snapshot(records),
            Err(e) => log::error!("Failed to parse history snapshot: {:?}", e),
        }
    }) as Box<dyn FnMut(JsValue)>);

    let error_callback = Closure::wrap(Box::new(move |err: JsValue| {
        log::error!("History subscription error: {:?}", err);
    }) as Box<dyn FnMut(JsValue)>);

    let unsubscribe = subscribeHistory(
        &path,
        snapshot_callback.as_ref().unchecked_ref(),
        error_callback.as_ref().unchecked_ref(),
    );

    Subscription {
        unsubscribe,
        _callbacks: vec![snapshot_callback, error_callback],
    }
}

pub async fn save_record(uid: &str, record: &HistoryRecord) -> Result<(), String> {
    let record_js = record
        .to_js()
        .map_err(|e| format!("Failed to serialize record: {}", e))?;

    addHistoryRecord(&collection_path(uid), &record.id, record_js)
        .await
        .map_err(|e| format!("Failed to save record: {:?}", e))
}
