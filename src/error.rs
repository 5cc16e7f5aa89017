//! Errors raised by host backends and configuration loading.
//!
//! Controller operations never return these; they log and carry on with
//! defaults. Only [`crate::config::ThemeConfig::from_json`] hands one back to
//! the page.

/// Failure talking to the host environment.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No window or no `localStorage` (private mode, sandboxed iframe).
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    /// A storage call threw.
    #[error("storage {op} failed for key {key:?}: {message}")]
    Storage { op: &'static str, key: String, message: String },
    /// A DOM call threw or the document is missing.
    #[error("document update failed: {0}")]
    Dom(String),
    /// The configuration JSON did not parse.
    #[error("invalid theme config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("invalid theme config field {field}: {reason}")]
    Config { field: &'static str, reason: String },
}
