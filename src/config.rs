//! Application Configuration
//!
//! Read once at startup from the server-injected `window.__ROADMAP_CONFIG__` object.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__ROADMAP_CONFIG__";

/// Signed-in user's roles (determined by the server)
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub is_authenticated: bool,
    pub is_collaborator: bool,
    pub is_administrator: bool,
}

impl Session {
    /// Staff may move and remove posts on the board
    pub fn is_staff(&self) -> bool {
        self.is_authenticated && (self.is_collaborator || self.is_administrator)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Origin prefixed to every API path; empty means the page origin
    pub api_base: String,
    pub log_level: String,
    pub session: Session,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: "info".to_string(),
            session: Session::default(),
        }
    }
}

impl AppConfig {
    /// Load from the page global, falling back to defaults
    pub fn load() -> Self {
        let mut config = match read_global() {
            Ok(Some(config)) => config,
            Ok(None) => AppConfig::default(),
            Err(e) => {
                log::warn!("[CONFIG] ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                AppConfig::default()
            }
        };
        if config.api_base.is_empty() {
            config.api_base = page_origin();
        }
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        config
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn read_global() -> Result<Option<AppConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value).map(Some).map_err(|e| e.to_string())
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
