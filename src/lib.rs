//! Root crate facade for pasteview detection and preview rendering.

pub use pasteview_core::{
    classify, classify_traced, config, configure_renderer, constants, detection, error, models,
    normalize_hint, preview_etag, preview_renderer, render, render_preview, resolve_content_type,
    resolve_content_type_with_hints, resolve_stored_content_type, Classification, ContentType,
    PreviewConfig, PreviewError, PreviewRenderer, TypeHint, PREVIEW_CONTENT_SECURITY_POLICY,
    PREVIEW_HTML_MIME, RAW_TEXT_MIME,
};
