//! Content-type tags shared by detection, rendering, and storage callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PreviewError;

/// A concrete, renderable content type.
///
/// The request-time `auto` sentinel is not a variant here; it only
/// exists as [`TypeHint::Auto`] and is always resolved before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Html,
    Markdown,
    Svg,
    Mermaid,
}

impl ContentType {
    /// Every concrete content type.
    pub const ALL: [ContentType; 4] = [
        ContentType::Html,
        ContentType::Markdown,
        ContentType::Svg,
        ContentType::Mermaid,
    ];

    /// Canonical lowercase label persisted alongside a paste.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Html => "html",
            ContentType::Markdown => "markdown",
            ContentType::Svg => "svg",
            ContentType::Mermaid => "mermaid",
        }
    }

    /// Title of the preview page rendered for this type.
    pub fn preview_title(self) -> &'static str {
        match self {
            ContentType::Html => "HTML Preview",
            ContentType::Markdown => "Markdown Preview",
            ContentType::Svg => "SVG Preview",
            ContentType::Mermaid => "Mermaid Preview",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = PreviewError;

    /// Strict parse of a canonical label. Synonyms such as `md` are handled by
    /// [`crate::detection::normalize_hint`], not here.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        ContentType::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| PreviewError::UnknownContentType(value.to_string()))
    }
}

/// A caller-declared hint after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// The caller pinned a concrete type; detection is skipped.
    Concrete(ContentType),
    /// The caller explicitly asked for detection.
    Auto,
}

impl TypeHint {
    /// Concrete type pinned by this hint, if any.
    pub fn concrete(self) -> Option<ContentType> {
        match self {
            TypeHint::Concrete(content_type) => Some(content_type),
            TypeHint::Auto => None,
        }
    }
}

impl From<ContentType> for TypeHint {
    fn from(value: ContentType) -> Self {
        TypeHint::Concrete(value)
    }
}
