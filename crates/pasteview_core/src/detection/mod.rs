//! Content-type detection: hint normalization plus a heuristic cascade.
//!
//! Detection is total and pure. Every input, including empty or malformed
//! text, resolves to one of the four concrete [`ContentType`]s; content that
//! trips no signal defaults to HTML, the service's primary use case.

mod markdown;
mod rules;

pub use markdown::{is_definitely_markdown, MarkdownFeatures};
pub use rules::{detection_rules, DetectionRule};

pub(crate) use rules::looks_like_full_document;

use crate::models::{ContentType, TypeHint};

/// Rule name reported when no cascade rule matched.
pub const FALLBACK_RULE: &str = "fallback";

/// Outcome of running the cascade, with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub content_type: ContentType,
    pub rule: &'static str,
}

/// Normalize a free-form, caller-declared type hint.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Synonyms
/// `md` and `xml` map to Markdown and HTML.
///
/// # Returns
/// `None` for absent, empty, or unrecognized hints (treated as no opinion).
pub fn normalize_hint(hint: Option<&str>) -> Option<TypeHint> {
    let normalized = hint?.trim().to_ascii_lowercase();
    let resolved = match normalized.as_str() {
        "md" | "markdown" => TypeHint::Concrete(ContentType::Markdown),
        "svg" => TypeHint::Concrete(ContentType::Svg),
        "mermaid" => TypeHint::Concrete(ContentType::Mermaid),
        "html" | "xml" => TypeHint::Concrete(ContentType::Html),
        "auto" => TypeHint::Auto,
        _ => {
            if !normalized.is_empty() {
                tracing::debug!("Ignoring unrecognized content type hint '{}'", normalized);
            }
            return None;
        }
    };
    Some(resolved)
}

/// Run the detection cascade and report which rule fired.
pub fn classify_traced(content: &str) -> Classification {
    let trimmed = content.trim();
    let classification = detection_rules()
        .iter()
        .find(|rule| rule.matches(trimmed))
        .map(|rule| Classification {
            content_type: rule.content_type,
            rule: rule.name,
        })
        .unwrap_or(Classification {
            content_type: ContentType::Html,
            rule: FALLBACK_RULE,
        });
    tracing::trace!(
        rule = classification.rule,
        content_type = %classification.content_type,
        content_len = content.len(),
        "classified content"
    );
    classification
}

/// Detect the content type of `content`.
pub fn classify(content: &str) -> ContentType {
    classify_traced(content).content_type
}

/// Resolve the effective type for new or updated content.
///
/// A hint that normalizes to a concrete type always wins; `auto`, absent, and
/// unrecognized hints fall through to [`classify`].
pub fn resolve_content_type(content: &str, hint: Option<&str>) -> ContentType {
    resolve_content_type_with_hints(content, &[hint])
}

/// Resolve the effective type from several candidate hint fields.
///
/// The first hint that normalizes to anything, `auto` included, is the
/// effective one; later hints are not consulted.
pub fn resolve_content_type_with_hints(content: &str, hints: &[Option<&str>]) -> ContentType {
    hints
        .iter()
        .find_map(|hint| normalize_hint(*hint))
        .and_then(TypeHint::concrete)
        .unwrap_or_else(|| classify(content))
}

/// Resolve the type of a stored record at view time.
///
/// Records normally carry their resolved type. Missing, `auto`, or otherwise
/// unusable values re-run detection, which is idempotent for well-formed rows.
pub fn resolve_stored_content_type(content: &str, stored: Option<&str>) -> ContentType {
    match normalize_hint(stored).and_then(TypeHint::concrete) {
        Some(content_type) => content_type,
        None => {
            tracing::debug!("Stored content type missing or unresolved; re-detecting");
            classify(content)
        }
    }
}
