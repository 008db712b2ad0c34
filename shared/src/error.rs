//! Error type shared by the storage, DOM and clipboard seams.

use thiserror::Error;

/// Failures surfaced by the theme's storage, DOM and clipboard seams.
///
/// None of these are fatal: callers log them and keep the page usable.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// `localStorage` is missing, disabled, or refused a write.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// A DOM call threw or returned an unexpected node type.
    #[error("dom operation failed: {0}")]
    Dom(String),

    /// The async clipboard write was unavailable or rejected.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// The inline theme configuration was not valid JSON.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ThemeError>;
