//! Error type shared by config loading and the browser bindings.
//!
//! Nothing here is fatal to the page: mount code logs a `UiError` and leaves
//! the affected feature disabled.

/// Failure raised while loading config or talking to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// `window` is not available (not running in a browser main thread).
    #[error("browser window is unavailable")]
    NoWindow,
    /// `window.document` is not available.
    #[error("document is unavailable")]
    NoDocument,
    /// A DOM or Web API call returned a JS exception.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The inline config block is not valid JSON for [`crate::PortfolioConfig`].
    #[error("invalid portfolio config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
