//! Error types for the few fallible edges of the preview core.
//!
//! Classification and rendering are total and never return these.
use thiserror::Error;

/// Top-level error type for pasteview core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("Preview renderer already configured")]
    AlreadyConfigured,
}
