//! Comrak-based Markdown conversion with diagram-aware fences.

use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{format_html, parse_document, Arena, Options};

use super::escape::escape_html;

/// Markdown engine configured once and shared read-only afterwards.
pub(crate) struct MarkdownEngine {
    options: Options<'static>,
}

impl MarkdownEngine {
    pub(crate) fn new(smart_punctuation: bool) -> Self {
        let mut options = Options::default();
        let ext = &mut options.extension;
        ext.autolink = true;
        ext.table = true;
        ext.strikethrough = true;
        ext.tasklist = true;
        ext.tagfilter = false;

        options.parse.smart = smart_punctuation;
        // Pastes are rendered as their author wrote them; script policy is
        // enforced by the serving layer's CSP sandbox.
        options.render.r#unsafe = true;

        Self { options }
    }

    /// Convert Markdown to an HTML fragment.
    ///
    /// Never fails: the engine accepts any input, and an (unexpected) formatter
    /// error degrades to an escaped `<pre>` of the source.
    pub(crate) fn render(&self, markdown: &str) -> String {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);
        rewrite_diagram_fences(root);

        let mut html = String::new();
        match format_html(root, &self.options, &mut html) {
            Ok(()) => html,
            Err(err) => {
                tracing::warn!("Markdown formatting failed, showing source: {}", err);
                format!("<pre>{}</pre>", escape_html(markdown))
            }
        }
    }
}

/// Replace `mermaid` and `svg` fenced blocks with raw HTML blocks; other code
/// blocks keep the engine's `<pre><code class="language-..">` output.
fn rewrite_diagram_fences<'a>(node: &'a AstNode<'a>) {
    let replacement = {
        let data = node.data.borrow();
        match &data.value {
            NodeValue::CodeBlock(block) => diagram_fence_html(&block.info, &block.literal),
            _ => None,
        }
    };
    if let Some(literal) = replacement {
        node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 0,
            literal,
        });
        return;
    }

    let mut child = node.first_child();
    while let Some(next) = child {
        rewrite_diagram_fences(next);
        child = next.next_sibling();
    }
}

fn diagram_fence_html(info: &str, literal: &str) -> Option<String> {
    let language = info.split_whitespace().next()?.to_ascii_lowercase();
    match language.as_str() {
        // Escaped text; laid out client-side.
        "mermaid" => Some(format!(
            "<div class=\"mermaid\">{}</div>\n",
            escape_html(literal)
        )),
        // Literal vector markup, rendered as an image.
        "svg" => Some(format!("<div class=\"embedded-svg\">{}</div>\n", literal)),
        _ => None,
    }
}
