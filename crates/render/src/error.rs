use thiserror::Error;

/// Renderer configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("unsupported output format: {0} (expected text or html)")]
    UnsupportedFormat(String),

    #[error("minor digits must be at most 19, got {0}")]
    InvalidMinorDigits(u32),
}
