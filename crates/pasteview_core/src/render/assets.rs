//! Head and script includes for client-side finishing (highlighting, diagrams).

use super::escape::escape_html;
use crate::config::{MermaidSecurityLevel, PreviewConfig};

/// Pre-rendered include snippets, built once from [`PreviewConfig`].
#[derive(Debug, Clone)]
pub(crate) struct PreviewAssets {
    highlight_stylesheet: String,
    highlight_script: String,
    mermaid_script: String,
    mermaid_init: String,
}

impl PreviewAssets {
    pub(crate) fn new(config: &PreviewConfig) -> Self {
        Self {
            highlight_stylesheet: format!(
                "    <link rel=\"stylesheet\" href=\"{}\" />",
                escape_html(&config.highlight_css_url)
            ),
            highlight_script: script_tag(&config.highlight_js_url),
            mermaid_script: script_tag(&config.mermaid_js_url),
            mermaid_init: mermaid_init(config.mermaid_security_level),
        }
    }

    pub(crate) fn markdown_head(&self) -> String {
        self.highlight_stylesheet.clone()
    }

    /// Highlight every code block, then lay out any diagrams.
    pub(crate) fn markdown_scripts(&self) -> String {
        format!(
            r#"{highlight}
{mermaid}
    <script>
      document.addEventListener('DOMContentLoaded', () => {{
        document.querySelectorAll('pre code').forEach((block) => {{
          if (window.hljs) window.hljs.highlightElement(block);
        }});
{init}
      }});
    </script>"#,
            highlight = self.highlight_script,
            mermaid = self.mermaid_script,
            init = self.mermaid_init,
        )
    }

    pub(crate) fn mermaid_scripts(&self) -> String {
        format!(
            r#"{mermaid}
    <script>
      document.addEventListener('DOMContentLoaded', () => {{
{init}
      }});
    </script>"#,
            mermaid = self.mermaid_script,
            init = self.mermaid_init,
        )
    }

    pub(crate) fn svg_head(&self) -> String {
        "    <style>\n      .svg-container svg { max-width: 100%; height: auto; display: block; }\n    </style>"
            .to_string()
    }
}

fn script_tag(src: &str) -> String {
    format!("    <script src=\"{}\"></script>", escape_html(src))
}

/// Diagram bootstrap. A missing library is a silent no-op; render failures
/// (sync or async) go to the console, never to the page.
fn mermaid_init(security_level: MermaidSecurityLevel) -> String {
    format!(
        r#"        if (!window.mermaid) return;
        window.mermaid.initialize({{ startOnLoad: false, securityLevel: '{level}' }});
        Promise.resolve()
          .then(() => window.mermaid.run({{ querySelector: '.mermaid' }}))
          .catch((error) => console.error('Mermaid render failed', error));"#,
        level = security_level.as_str(),
    )
}
