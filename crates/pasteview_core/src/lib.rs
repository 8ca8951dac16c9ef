//! Core library for pasteview: content-type detection and preview rendering.

/// Renderer configuration loading and defaults.
pub mod config;
/// Shared constants (thresholds, default asset URLs, response headers).
pub mod constants;
/// Heuristic content-type detection and hint resolution.
pub mod detection;
/// Error types for fallible library edges.
pub mod error;
/// Content-type models.
pub mod models;
/// Preview document rendering.
pub mod render;

pub use config::PreviewConfig;
pub use constants::{PREVIEW_CONTENT_SECURITY_POLICY, PREVIEW_HTML_MIME, RAW_TEXT_MIME};
pub use detection::{
    classify, classify_traced, normalize_hint, resolve_content_type,
    resolve_content_type_with_hints, resolve_stored_content_type, Classification,
};
pub use error::PreviewError;
pub use models::{ContentType, TypeHint};
pub use render::{
    configure_renderer, preview_etag, preview_renderer, render_preview, PreviewRenderer,
};
