/// Runtime configuration: built-in defaults, build-time env, then page globals
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Firebase web app settings, as injected by the hosting page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub cors_proxy: String,
    pub firebase: Option<FirebaseConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            gemini_api_key: option_env!("GEMINI_API_KEY").unwrap_or_default().to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            cors_proxy: crate::input::DEFAULT_CORS_PROXY.to_string(),
            firebase: None,
        }
    }
}

impl AppConfig {
    /// Parse an `__app_config` document; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<AppConfig, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid app config: {}", e))
    }

    /// Apply a `__firebase_config` JSON string
    pub fn with_firebase_json(mut self, json: &str) -> Result<AppConfig, String> {
        let firebase: FirebaseConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid Firebase config: {}", e))?;
        self.firebase = Some(firebase);
        Ok(self)
    }

    pub fn history_enabled(&self) -> bool {
        self.firebase.is_some()
    }

    /// Read `window.__app_config` and `window.__firebase_config`, falling back to defaults
    pub fn load() -> AppConfig {
        let mut config = match read_global("__app_config") {
            Some(value) => match parse_js_config(value) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    AppConfig::default()
                }
            },
            None => AppConfig::default(),
        };

        if let Some(json) = read_global("__firebase_config").and_then(|v| v.as_string()) {
            config = match config.clone().with_firebase_json(&json) {
                Ok(updated) => updated,
                Err(e) => {
                    log::warn!("{}; history disabled", e);
                    config
                }
            };
        }

        if config.gemini_api_key.is_empty() {
            log::warn!("No Gemini API key configured");
        }
        log::info!(
            "Loaded config: model={}, history_enabled={}",
            config.gemini_model,
            config.history_enabled()
        );
        config
    }
}

fn read_global(name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_null() && !v.is_undefined())
}

fn parse_js_config(value: JsValue) -> Result<AppConfig, String> {
    match value.as_string() {
        Some(json) => AppConfig::from_json(&json),
        None => serde_wasm_bindgen::from_value(value)
            .map_err(|e| format!("Invalid app config: {:?}", e)),
    }
}
