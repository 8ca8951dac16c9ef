//! Renderer tests covering passthrough, wrapping, and diagram embedding.

use super::{
    configure_renderer, preview_etag, preview_renderer, render_preview, PreviewPlan,
    PreviewRenderer,
};
use crate::config::PreviewConfig;
use crate::error::PreviewError;
use crate::models::ContentType;

fn renderer() -> PreviewRenderer {
    PreviewRenderer::new(PreviewConfig::default())
}

#[test]
fn renderer_keeps_the_config_it_was_built_with() {
    let config = PreviewConfig {
        smart_punctuation: false,
        ..PreviewConfig::default()
    };
    let renderer = PreviewRenderer::new(config.clone());
    assert_eq!(renderer.config(), &config);
    let page = renderer.render("\"quoted\"", ContentType::Markdown);
    assert!(!page.contains('\u{201c}'));
}

#[test]
fn full_html_document_passes_through_unchanged() {
    let document = "<!DOCTYPE html><html><head><title>Mine</title></head><body>x</body></html>";
    assert_eq!(renderer().render(document, ContentType::Html), document);

    let padded = "\n  <html><body>y</body></html>\n";
    assert_eq!(renderer().render(padded, ContentType::Html), padded);
    assert_eq!(
        renderer().plan(padded, ContentType::Html),
        PreviewPlan::Passthrough
    );
}

#[test]
fn html_fragment_is_wrapped_in_container() {
    let page = renderer().render("<b>hi</b>", ContentType::Html);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<div class=\"container\"><b>hi</b></div>"));
    assert!(page.contains("<title>HTML Preview</title>"));
}

#[test]
fn markdown_renders_article_with_client_scripts() {
    let page = renderer().render("# Hello\n\nSome *text*.", ContentType::Markdown);
    assert!(page.contains("<article class=\"markdown-body\">"));
    assert!(page.contains("<h1>Hello</h1>"));
    assert!(page.contains("<em>text</em>"));
    assert!(page.contains("highlight.min.js"));
    assert!(page.contains("github-dark.min.css"));
    assert!(page.contains("mermaid.min.js"));
    assert!(page.contains("<title>Markdown Preview</title>"));
}

#[test]
fn markdown_mermaid_fence_is_escaped_inside_diagram_div() {
    let page = renderer().render(
        "Intro\n\n```mermaid\ngraph TD; A-->B\n```\n",
        ContentType::Markdown,
    );
    assert!(page.contains("<div class=\"mermaid\">graph TD; A--&gt;B"));
    assert!(!page.contains("graph TD; A-->B"));
}

#[test]
fn markdown_svg_fence_is_embedded_raw() {
    let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"4\" height=\"4\"/></svg>";
    let page = renderer().render(&format!("```svg\n{svg}\n```\n"), ContentType::Markdown);
    assert!(page.contains("<div class=\"embedded-svg\">"));
    assert!(page.contains(svg));
    assert!(!page.contains("&lt;svg"));
}

#[test]
fn svg_is_embedded_in_constrained_container() {
    let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1 1\"></svg>";
    let page = renderer().render(svg, ContentType::Svg);
    assert!(page.contains(&format!("<div class=\"svg-container\">{svg}</div>")));
    assert!(page.contains(".svg-container svg { max-width: 100%; height: auto;"));
    assert!(!page.contains("mermaid.min.js"));
}

#[test]
fn mermaid_source_is_escaped_and_initialized() {
    let page = renderer().render("graph TD\n  A-->B", ContentType::Mermaid);
    assert!(page.contains("<div class=\"mermaid\">graph TD\n  A--&gt;B</div>"));
    assert!(page.contains("mermaid.min.js"));
    assert!(page.contains("querySelector: '.mermaid'"));
    assert!(!page.contains("highlight.min.js"));
}

#[test]
fn empty_payloads_render_valid_empty_containers() {
    let renderer = renderer();
    assert!(renderer
        .render("", ContentType::Svg)
        .contains("<div class=\"svg-container\"></div>"));
    assert!(renderer
        .render("", ContentType::Mermaid)
        .contains("<div class=\"mermaid\"></div>"));
    assert!(renderer
        .render("", ContentType::Markdown)
        .contains("<article class=\"markdown-body\">"));
    assert!(renderer
        .render("", ContentType::Html)
        .contains("<div class=\"container\"></div>"));
}

#[test]
fn every_type_shares_the_same_shell() {
    let renderer = renderer();
    for content_type in ContentType::ALL {
        let page = renderer.render("text", content_type);
        assert!(page.starts_with("<!DOCTYPE html>"), "type: {content_type}");
        assert!(
            page.contains("color-scheme: light dark"),
            "type: {content_type}"
        );
        assert!(
            page.contains(&format!("<title>{}</title>", content_type.preview_title())),
            "type: {content_type}"
        );
    }
}

#[test]
fn fragment_rendering_returns_body_only() {
    let renderer = renderer();
    let fragment = renderer.render_fragment("graph TD; A-->B", ContentType::Mermaid);
    assert_eq!(
        fragment,
        "    <div class=\"mermaid\">graph TD; A--&gt;B</div>"
    );
    let document = "<!DOCTYPE html><html></html>";
    assert_eq!(
        renderer.render_fragment(document, ContentType::Html),
        document
    );
}

#[test]
fn shared_renderer_rejects_late_configuration() {
    let shared = preview_renderer();
    assert!(std::ptr::eq(shared, preview_renderer()));
    assert_eq!(
        configure_renderer(PreviewConfig::default()),
        Err(PreviewError::AlreadyConfigured)
    );
    let page = render_preview("<b>hi</b>", ContentType::Html);
    assert!(page.contains("<b>hi</b>"));
}

#[test]
fn etag_depends_on_content_and_type() {
    let markdown = preview_etag("# hi", ContentType::Markdown);
    assert_eq!(markdown, preview_etag("# hi", ContentType::Markdown));
    assert_ne!(markdown, preview_etag("# hi", ContentType::Html));
    assert_ne!(markdown, preview_etag("# ho", ContentType::Markdown));
    assert!(markdown.starts_with('"') && markdown.ends_with('"'));
    assert_eq!(markdown.len(), 64 + 2);
}
