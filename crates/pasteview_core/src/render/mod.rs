//! Preview rendering for the four concrete content types.
//!
//! Each type contributes only its [`PageParts`]; one shared shell assembles the
//! document. Markdown and Mermaid output finishes rendering client-side
//! (highlighting, diagram layout) through the script includes it carries.

mod assets;
mod escape;
mod markdown;
mod page;
#[cfg(test)]
mod tests;

use std::sync::OnceLock;

pub use escape::escape_html;
pub use page::{assemble_page, PageParts};

use crate::config::PreviewConfig;
use crate::detection::looks_like_full_document;
use crate::error::PreviewError;
use crate::models::ContentType;
use assets::PreviewAssets;
use markdown::MarkdownEngine;

/// What the renderer does with a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewPlan {
    /// The paste already is a complete page; serve it unchanged.
    Passthrough,
    /// Wrap a body fragment in the shared shell.
    Page(PageParts),
}

/// Configured renderer: Markdown engine plus client-side includes.
pub struct PreviewRenderer {
    config: PreviewConfig,
    markdown: MarkdownEngine,
    assets: PreviewAssets,
}

impl PreviewRenderer {
    /// Build a renderer. The Markdown engine, fence rewrite included, is
    /// configured here and never changed afterwards.
    pub fn new(config: PreviewConfig) -> Self {
        let markdown = MarkdownEngine::new(config.smart_punctuation);
        let assets = PreviewAssets::new(&config);
        Self {
            config,
            markdown,
            assets,
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Decide how `content` of `content_type` is presented.
    pub fn plan(&self, content: &str, content_type: ContentType) -> PreviewPlan {
        let title = content_type.preview_title();
        match content_type {
            ContentType::Html => {
                if looks_like_full_document(content) {
                    PreviewPlan::Passthrough
                } else {
                    PreviewPlan::Page(PageParts::new(
                        title,
                        format!("    <div class=\"container\">{content}</div>"),
                    ))
                }
            }
            ContentType::Markdown => PreviewPlan::Page(
                PageParts::new(
                    title,
                    format!(
                        "    <article class=\"markdown-body\">\n{}    </article>",
                        self.markdown.render(content)
                    ),
                )
                .with_head(self.assets.markdown_head())
                .with_scripts(self.assets.markdown_scripts()),
            ),
            ContentType::Svg => PreviewPlan::Page(
                PageParts::new(
                    title,
                    format!("    <div class=\"svg-container\">{content}</div>"),
                )
                .with_head(self.assets.svg_head()),
            ),
            ContentType::Mermaid => PreviewPlan::Page(
                PageParts::new(
                    title,
                    format!("    <div class=\"mermaid\">{}</div>", escape_html(content)),
                )
                .with_scripts(self.assets.mermaid_scripts()),
            ),
        }
    }

    /// Render a complete preview document.
    pub fn render(&self, content: &str, content_type: ContentType) -> String {
        match self.plan(content, content_type) {
            PreviewPlan::Passthrough => content.to_string(),
            PreviewPlan::Page(parts) => assemble_page(&parts),
        }
    }

    /// Render only the body markup, for embedding in an existing page such as
    /// an editor's preview pane. Full HTML documents are returned unchanged.
    pub fn render_fragment(&self, content: &str, content_type: ContentType) -> String {
        match self.plan(content, content_type) {
            PreviewPlan::Passthrough => content.to_string(),
            PreviewPlan::Page(parts) => parts.body,
        }
    }
}

static PREVIEW_RENDERER: OnceLock<PreviewRenderer> = OnceLock::new();

/// Install the process-wide renderer configuration.
///
/// # Errors
/// [`PreviewError::AlreadyConfigured`] once the shared renderer exists, either
/// from an earlier call or from first use of [`preview_renderer`].
pub fn configure_renderer(config: PreviewConfig) -> Result<(), PreviewError> {
    PREVIEW_RENDERER
        .set(PreviewRenderer::new(config))
        .map_err(|_| PreviewError::AlreadyConfigured)
}

/// Shared renderer, initialized from the environment on first use unless
/// [`configure_renderer`] ran first.
pub fn preview_renderer() -> &'static PreviewRenderer {
    PREVIEW_RENDERER.get_or_init(|| {
        let config = PreviewConfig::from_env();
        tracing::debug!(
            mermaid_security_level = %config.mermaid_security_level,
            smart_punctuation = config.smart_punctuation,
            "initialized preview renderer from environment"
        );
        PreviewRenderer::new(config)
    })
}

/// Render `content` as a complete preview document of `content_type`.
pub fn render_preview(content: &str, content_type: ContentType) -> String {
    preview_renderer().render(content, content_type)
}

/// Strong ETag for the preview of `content` as `content_type`.
///
/// Callers may cache rendered documents under this key; the renderer's
/// configuration is fixed per process and is not part of the key.
pub fn preview_etag(content: &str, content_type: ContentType) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(content_type.as_str().as_bytes());
    hasher.update(&[0]);
    hasher.update(content.as_bytes());
    format!("\"{}\"", hasher.finalize().to_hex())
}
