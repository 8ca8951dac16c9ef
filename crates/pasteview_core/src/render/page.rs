//! Shared preview page shell.

use super::escape::escape_html;

/// Pieces a content type contributes to the shared page shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParts {
    pub title: &'static str,
    /// Extra `<head>` markup (stylesheets, style blocks).
    pub head: String,
    pub body: String,
    /// Script tags appended after the body markup.
    pub scripts: String,
}

impl PageParts {
    pub fn new(title: &'static str, body: String) -> Self {
        Self {
            title,
            head: String::new(),
            body,
            scripts: String::new(),
        }
    }

    pub fn with_head(mut self, head: String) -> Self {
        self.head = head;
        self
    }

    pub fn with_scripts(mut self, scripts: String) -> Self {
        self.scripts = scripts;
        self
    }
}

const BASE_STYLES: &str = r#"      :root { color-scheme: light dark; }
      body {
        margin: 0;
        font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
        background: #f6f7fb;
        color: #111827;
      }
      .container,
      .svg-container,
      .mermaid {
        max-width: 1100px;
        margin: 24px auto;
        padding: 24px;
        background: white;
        border-radius: 12px;
        box-shadow: 0 6px 24px rgba(15, 23, 42, 0.08);
      }
      .markdown-body {
        max-width: 980px;
        margin: 24px auto;
        padding: 24px 28px;
        background: white;
        border-radius: 12px;
        box-shadow: 0 6px 24px rgba(15, 23, 42, 0.08);
        line-height: 1.7;
      }
      .markdown-body pre {
        overflow: auto;
        padding: 14px 16px;
        border-radius: 8px;
        background: #0f172a;
        color: #e2e8f0;
      }
      .mermaid { text-align: center; }
      .markdown-body .mermaid { box-shadow: none; padding: 0; }
      .embedded-svg {
        overflow: auto;
        max-width: 100%;
      }
      @media (prefers-color-scheme: dark) {
        body { background: #0b1220; color: #e5e7eb; }
        .container, .markdown-body, .svg-container, .mermaid { background: #111827; }
      }"#;

/// Assemble a complete HTML document around `parts`.
pub fn assemble_page(parts: &PageParts) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <style>
{styles}
    </style>
{head}
  </head>
  <body>
{body}
{scripts}
  </body>
</html>
"#,
        title = escape_html(parts.title),
        styles = BASE_STYLES,
        head = parts.head,
        body = parts.body,
        scripts = parts.scripts,
    )
}
