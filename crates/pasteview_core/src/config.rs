//! Renderer configuration loading from environment variables.

use serde::Deserialize;
use std::env;
use std::fmt;

use crate::constants;

/// Mermaid `securityLevel` passed to `mermaid.initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MermaidSecurityLevel {
    Strict,
    #[default]
    Loose,
    Antiscript,
    Sandbox,
}

impl MermaidSecurityLevel {
    /// Parse a level name, case-insensitive.
    ///
    /// # Returns
    /// `Some(level)` for a known level, otherwise `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "loose" => Some(Self::Loose),
            "antiscript" => Some(Self::Antiscript),
            "sandbox" => Some(Self::Sandbox),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
            Self::Antiscript => "antiscript",
            Self::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for MermaidSecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime configuration for the preview renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreviewConfig {
    pub highlight_css_url: String,
    pub highlight_js_url: String,
    pub mermaid_js_url: String,
    pub mermaid_security_level: MermaidSecurityLevel,
    pub smart_punctuation: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            highlight_css_url: constants::DEFAULT_HIGHLIGHT_CSS_URL.to_string(),
            highlight_js_url: constants::DEFAULT_HIGHLIGHT_JS_URL.to_string(),
            mermaid_js_url: constants::DEFAULT_MERMAID_JS_URL.to_string(),
            mermaid_security_level: MermaidSecurityLevel::default(),
            smart_punctuation: true,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn url_or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl PreviewConfig {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`PreviewConfig`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unrecognized values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mermaid_security_level = match lookup("PASTEVIEW_MERMAID_SECURITY_LEVEL") {
            None => defaults.mermaid_security_level,
            Some(raw) => MermaidSecurityLevel::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "Ignoring unknown PASTEVIEW_MERMAID_SECURITY_LEVEL '{}'; using {}",
                    raw,
                    defaults.mermaid_security_level
                );
                defaults.mermaid_security_level
            }),
        };

        let smart_punctuation = match lookup("PASTEVIEW_SMART_PUNCTUATION") {
            None => defaults.smart_punctuation,
            Some(raw) => parse_env_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "Ignoring unrecognized PASTEVIEW_SMART_PUNCTUATION '{}'",
                    raw
                );
                defaults.smart_punctuation
            }),
        };

        Self {
            highlight_css_url: url_or_default(
                lookup("PASTEVIEW_HIGHLIGHT_CSS_URL"),
                &defaults.highlight_css_url,
            ),
            highlight_js_url: url_or_default(
                lookup("PASTEVIEW_HIGHLIGHT_JS_URL"),
                &defaults.highlight_js_url,
            ),
            mermaid_js_url: url_or_default(
                lookup("PASTEVIEW_MERMAID_JS_URL"),
                &defaults.mermaid_js_url,
            ),
            mermaid_security_level,
            smart_punctuation,
        }
    }
}
