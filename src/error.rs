/// Error type shared by the browser glue

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no window object available")]
    NoWindow,

    #[error("request failed: {0}")]
    Fetch(String),

    #[error("feed responded with HTTP {0}")]
    Status(u16),

    #[error("failed to decode feed: {0}")]
    Decode(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("DOM unavailable: {0}")]
    Dom(String),
}

impl SiteError {
    /// Wrap a rejected promise or thrown JS exception as a fetch error
    pub fn js(value: JsValue) -> Self {
        SiteError::Fetch(describe_js(&value))
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Decode(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SiteError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        SiteError::Decode(err.to_string())
    }
}

/// Best-effort text for a JS error value
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
