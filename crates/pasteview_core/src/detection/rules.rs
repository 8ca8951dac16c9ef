//! Ordered detection cascade. The first rule whose predicate matches wins.

use super::markdown::is_definitely_markdown;
use crate::models::ContentType;
use std::fmt;

/// One step of the detection cascade.
#[derive(Clone, Copy)]
pub struct DetectionRule {
    /// Stable rule name, reported by [`super::classify_traced`].
    pub name: &'static str,
    /// Type returned when the rule matches.
    pub content_type: ContentType,
    predicate: fn(&str) -> bool,
}

impl DetectionRule {
    /// Evaluate the rule against already-trimmed content.
    pub fn matches(&self, trimmed: &str) -> bool {
        (self.predicate)(trimmed)
    }
}

impl fmt::Debug for DetectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectionRule")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Signals are not mutually exclusive, so order is significant: a full HTML
/// document may embed a Mermaid fence and Markdown may embed SVG.
const RULES: &[DetectionRule] = &[
    DetectionRule {
        name: "full-document",
        content_type: ContentType::Html,
        predicate: looks_like_full_document,
    },
    DetectionRule {
        name: "leading-html-fence",
        content_type: ContentType::Html,
        predicate: opens_with_html_fence,
    },
    DetectionRule {
        name: "leading-mermaid-fence",
        content_type: ContentType::Mermaid,
        predicate: opens_with_mermaid_fence,
    },
    DetectionRule {
        name: "leading-svg-fence",
        content_type: ContentType::Svg,
        predicate: opens_with_svg_fence,
    },
    DetectionRule {
        name: "standalone-svg",
        content_type: ContentType::Svg,
        predicate: is_standalone_svg,
    },
    DetectionRule {
        name: "mermaid-fence",
        content_type: ContentType::Mermaid,
        predicate: contains_mermaid_fence,
    },
    DetectionRule {
        name: "svg-fence",
        content_type: ContentType::Svg,
        predicate: contains_svg_fence,
    },
    DetectionRule {
        name: "mermaid-keyword",
        content_type: ContentType::Mermaid,
        predicate: starts_with_mermaid_declaration,
    },
    DetectionRule {
        name: "html-tags",
        content_type: ContentType::Html,
        predicate: looks_like_html_fragment,
    },
    DetectionRule {
        name: "markdown-features",
        content_type: ContentType::Markdown,
        predicate: is_definitely_markdown,
    },
];

/// The cascade in evaluation order.
pub fn detection_rules() -> &'static [DetectionRule] {
    RULES
}

const MERMAID_DECLARATIONS: &[&str] = &[
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "gantt",
    "pie",
    "erDiagram",
    "journey",
    "stateDiagram",
    "gitGraph",
];

/// Declarations that must be followed by a direction such as `TD` or `LR`.
const DIRECTED_DECLARATIONS: &[&str] = &["graph", "flowchart"];

const SVG_NAMESPACE_DECLARATIONS: &[&str] = &[
    "xmlns=\"http://www.w3.org/2000/svg\"",
    "xmlns='http://www.w3.org/2000/svg'",
];

const HTML_TAG_MARKERS: &[&str] = &[
    "<div", "<p", "<span", "<h1", "<body", "<head", "<style", "<script", "<link", "<meta",
];

fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// `true` when the content is a complete HTML page rather than a fragment.
pub(crate) fn looks_like_full_document(content: &str) -> bool {
    let trimmed = content.trim_start();
    starts_with_ignore_ascii_case(trimmed, "<!DOCTYPE html>")
        || starts_with_ignore_ascii_case(trimmed, "<html")
}

/// Language tag of a fence opener line (first word of the info string).
pub(crate) fn fence_language(line: &str) -> Option<&str> {
    let info = line.trim_start().strip_prefix("```")?;
    Some(info.split_whitespace().next().unwrap_or(""))
}

fn opens_with_fence(trimmed: &str, language: &str) -> bool {
    trimmed
        .lines()
        .next()
        .and_then(fence_language)
        .map(|tag| tag.eq_ignore_ascii_case(language))
        .unwrap_or(false)
}

fn contains_fence(content: &str, language: &str) -> bool {
    content
        .lines()
        .filter_map(fence_language)
        .any(|tag| tag.eq_ignore_ascii_case(language))
}

fn opens_with_html_fence(trimmed: &str) -> bool {
    opens_with_fence(trimmed, "html")
}

fn opens_with_mermaid_fence(trimmed: &str) -> bool {
    opens_with_fence(trimmed, "mermaid")
}

fn opens_with_svg_fence(trimmed: &str) -> bool {
    opens_with_fence(trimmed, "svg")
}

fn contains_mermaid_fence(trimmed: &str) -> bool {
    contains_fence(trimmed, "mermaid")
}

fn contains_svg_fence(trimmed: &str) -> bool {
    contains_fence(trimmed, "svg")
}

/// All three conditions are required; HTML pages routinely embed inline
/// `<svg>` icons without being SVG documents.
fn is_standalone_svg(trimmed: &str) -> bool {
    trimmed.starts_with("<svg")
        && trimmed.contains("</svg>")
        && SVG_NAMESPACE_DECLARATIONS
            .iter()
            .any(|declaration| trimmed.contains(declaration))
}

fn starts_with_mermaid_declaration(trimmed: &str) -> bool {
    MERMAID_DECLARATIONS.iter().any(|keyword| {
        if !starts_with_ignore_ascii_case(trimmed, keyword) {
            return false;
        }
        let rest = &trimmed[keyword.len()..];
        if DIRECTED_DECLARATIONS.contains(keyword) {
            let mut chars = rest.chars();
            let separated = chars.next().map(char::is_whitespace).unwrap_or(false);
            let direction = chars.as_str().trim_start().chars().next();
            return separated && direction.is_some_and(|ch| ch.is_ascii_alphabetic());
        }
        // `stateDiagram-v2` is fine, `pies` is prose.
        rest.chars()
            .next()
            .map(|ch| !ch.is_alphanumeric())
            .unwrap_or(true)
    })
}

fn looks_like_html_fragment(trimmed: &str) -> bool {
    trimmed.starts_with('<') && HTML_TAG_MARKERS.iter().any(|tag| trimmed.contains(tag))
}
