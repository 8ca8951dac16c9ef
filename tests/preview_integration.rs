use pasteview::{
    render_preview, resolve_content_type, resolve_content_type_with_hints,
    resolve_stored_content_type, ContentType, PreviewConfig, PreviewRenderer,
    PREVIEW_CONTENT_SECURITY_POLICY,
};

/// Create-then-view flow: resolve once at creation, render from the stored label.
fn create_and_view(
    content: &str,
    content_type_field: Option<&str>,
    language_field: Option<&str>,
) -> (ContentType, String) {
    let resolved = resolve_content_type_with_hints(content, &[content_type_field, language_field]);
    let stored_label = resolved.as_str().to_string();

    let at_view = resolve_stored_content_type(content, Some(&stored_label));
    assert_eq!(at_view, resolved, "stored type must survive the round trip");
    (at_view, render_preview(content, at_view))
}

#[test]
fn test_markdown_paste_lifecycle() {
    let content = "# Design notes\n\n- detection\n- rendering\n\n```mermaid\nsequenceDiagram\n  A->>B: ping\n```\n";
    // The fenced diagram decides the auto-detected type.
    assert_eq!(resolve_content_type(content, None), ContentType::Mermaid);

    let (content_type, page) = create_and_view(content, Some("markdown"), None);
    assert_eq!(content_type, ContentType::Markdown);
    assert!(page.contains("<h1>Design notes</h1>"));
    assert!(page.contains("<li>detection</li>"));
    assert!(page.contains("<div class=\"mermaid\">sequenceDiagram\n  A-&gt;&gt;B: ping\n</div>"));
    assert!(page.contains("highlightElement"));
}

#[test]
fn test_language_field_used_when_content_type_missing() {
    let (content_type, page) = create_and_view("A-->B", None, Some("mermaid"));
    assert_eq!(content_type, ContentType::Mermaid);
    assert!(page.contains("<div class=\"mermaid\">A--&gt;B</div>"));
}

#[test]
fn test_auto_detected_svg_lifecycle() {
    let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 2 2\"><rect width=\"2\" height=\"2\"/></svg>";
    let (content_type, page) = create_and_view(svg, Some("auto"), Some("html"));
    assert_eq!(content_type, ContentType::Svg);
    assert!(page.contains(&format!("<div class=\"svg-container\">{svg}</div>")));
}

#[test]
fn test_full_page_paste_is_served_verbatim() {
    let page = "<!DOCTYPE html>\n<html><body><script>document.title='x'</script></body></html>";
    let (content_type, rendered) = create_and_view(page, None, None);
    assert_eq!(content_type, ContentType::Html);
    assert_eq!(rendered, page);
}

#[test]
fn test_legacy_record_without_type_is_redetected() {
    let content = "flowchart LR\n  A --> B";
    let resolved = resolve_stored_content_type(content, None);
    assert_eq!(resolved, ContentType::Mermaid);
    assert_eq!(resolve_stored_content_type(content, Some("auto")), resolved);
}

#[test]
fn test_custom_renderer_configuration() {
    let renderer = PreviewRenderer::new(PreviewConfig {
        mermaid_js_url: "/assets/mermaid.js".to_string(),
        ..PreviewConfig::default()
    });
    let page = renderer.render("pie\n  \"a\" : 1", ContentType::Mermaid);
    assert!(page.contains("<script src=\"/assets/mermaid.js\"></script>"));
    assert!(!page.contains("cdn.jsdelivr.net"));
}

#[test]
fn test_preview_policy_sandboxes_scripts() {
    assert!(PREVIEW_CONTENT_SECURITY_POLICY.starts_with("sandbox allow-scripts"));
    assert!(PREVIEW_CONTENT_SECURITY_POLICY.contains("script-src 'self' https:"));
    assert!(!PREVIEW_CONTENT_SECURITY_POLICY.contains("allow-same-origin"));
}
