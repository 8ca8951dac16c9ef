//! Shared constants used across pasteview crates.

/// Content shorter than this (in characters) needs only one Markdown feature.
pub const MARKDOWN_SHORT_CONTENT_CHARS: usize = 1000;
/// Markdown features required for content of any length.
pub const MARKDOWN_MIN_FEATURES: usize = 2;
/// Markdown features required for short content.
pub const MARKDOWN_MIN_FEATURES_SHORT: usize = 1;

/// Default highlight.js stylesheet for Markdown code blocks.
pub const DEFAULT_HIGHLIGHT_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github-dark.min.css";
/// Default highlight.js script.
pub const DEFAULT_HIGHLIGHT_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";
/// Default Mermaid script.
pub const DEFAULT_MERMAID_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/mermaid@11.6.0/dist/mermaid.min.js";

/// `Content-Security-Policy` a preview route should attach to rendered pages.
///
/// Previews execute author scripts; the sandbox keeps them off the serving
/// origin.
pub const PREVIEW_CONTENT_SECURITY_POLICY: &str =
    "sandbox allow-scripts allow-forms allow-modals allow-popups; \
default-src 'self' https: data: blob:; \
script-src 'self' https: 'unsafe-inline' 'unsafe-eval'; \
style-src 'self' https: 'unsafe-inline'; \
img-src 'self' https: data: blob:; \
font-src 'self' https: data:";

/// `Content-Type` for rendered preview documents.
pub const PREVIEW_HTML_MIME: &str = "text/html; charset=utf-8";
/// `Content-Type` for serving stored text verbatim, whatever its content type.
pub const RAW_TEXT_MIME: &str = "text/plain; charset=utf-8";
