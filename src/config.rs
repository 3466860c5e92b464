use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::FlashcardError,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub dark_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            dark_mode: true,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        load_json_or_default::<AppSettings>(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<(), FlashcardError> {
        save_json(self, SETTINGS_FILE)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Settings as used for requests: the stored values with `GEMINI_API_KEY`
    /// taking precedence over the stored key. The result is never saved.
    pub fn effective(&self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    fn with_api_key_override(&self, key: Option<String>) -> Self {
        let mut settings = self.clone();
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            settings.api_key = key.trim().to_string();
        }
        settings
    }
}
