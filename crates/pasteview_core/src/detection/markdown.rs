//! Structural Markdown feature scan used as the last detection signal.

use crate::constants::{
    MARKDOWN_MIN_FEATURES, MARKDOWN_MIN_FEATURES_SHORT, MARKDOWN_SHORT_CONTENT_CHARS,
};

/// Which Markdown constructs appear somewhere in a piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownFeatures {
    pub heading: bool,
    pub unordered_list: bool,
    pub ordered_list: bool,
    pub blockquote: bool,
    pub fenced_code: bool,
    pub link: bool,
    pub image: bool,
    pub table: bool,
}

impl MarkdownFeatures {
    /// Scan `content` line by line for each feature.
    pub fn scan(content: &str) -> Self {
        let mut features = Self {
            fenced_code: has_fenced_code_pair(content),
            ..Self::default()
        };
        let mut table_rows = 0usize;

        for line in content.lines() {
            features.heading |= is_heading_line(line);
            features.unordered_list |= is_unordered_list_line(line);
            features.ordered_list |= is_ordered_list_line(line);
            features.blockquote |= is_blockquote_line(line);
            features.link |= has_inline_link(line, "[");
            features.image |= has_inline_link(line, "![");
            if is_table_row(line) {
                table_rows = table_rows.saturating_add(1);
            }
        }
        features.table = table_rows >= 2;
        features
    }

    /// Number of distinct features present.
    pub fn count(&self) -> usize {
        [
            self.heading,
            self.unordered_list,
            self.ordered_list,
            self.blockquote,
            self.fenced_code,
            self.link,
            self.image,
            self.table,
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Fuzzy Markdown check: two features anywhere, or one in short content.
///
/// This is a majority-style heuristic, not a grammar check. Prose that happens
/// to contain a single list item in a long document stays unclassified.
pub fn is_definitely_markdown(content: &str) -> bool {
    let count = MarkdownFeatures::scan(content).count();
    if count >= MARKDOWN_MIN_FEATURES {
        return true;
    }
    count >= MARKDOWN_MIN_FEATURES_SHORT && content.chars().count() < MARKDOWN_SHORT_CONTENT_CHARS
}

/// Text after a single whitespace separator, if non-empty.
fn body_after_separator(rest: &str) -> Option<&str> {
    let mut chars = rest.chars();
    let separator = chars.next()?;
    if !separator.is_whitespace() {
        return None;
    }
    let body = chars.as_str();
    (!body.is_empty()).then_some(body)
}

fn is_heading_line(line: &str) -> bool {
    let hashes = line.bytes().take_while(|byte| *byte == b'#').count();
    if hashes == 0 || hashes > 6 {
        return false;
    }
    body_after_separator(&line[hashes..]).is_some()
}

fn is_unordered_list_line(line: &str) -> bool {
    line.strip_prefix(['-', '*', '+'])
        .and_then(body_after_separator)
        .is_some()
}

fn is_ordered_list_line(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    line[digits..]
        .strip_prefix('.')
        .and_then(body_after_separator)
        .is_some()
}

fn is_blockquote_line(line: &str) -> bool {
    line.strip_prefix('>')
        .and_then(body_after_separator)
        .is_some()
}

/// A line-leading triple backtick followed, anywhere later, by another one.
fn has_fenced_code_pair(content: &str) -> bool {
    let bytes = content.as_bytes();
    let first_opener = content
        .match_indices("```")
        .map(|(idx, _)| idx)
        .find(|&idx| idx == 0 || matches!(bytes[idx - 1], b'\n' | b'\r'));
    match (first_opener, content.rfind("```")) {
        (Some(opener), Some(last)) => last >= opener + 3,
        _ => false,
    }
}

/// `[label](target)` (or `![alt](target)` with `opener = "!["`) on one line,
/// with a non-empty label and target.
///
/// Single pass over the line: only the first opener and the last `)` can
/// satisfy a given `](`.
fn has_inline_link(line: &str, opener: &str) -> bool {
    let first_open = line.find(opener);
    let last_paren = line.rfind(')');
    line.match_indices("](").any(|(close, _)| {
        first_open.is_some_and(|open| open + opener.len() < close)
            && last_paren.is_some_and(|paren| paren > close + 2)
    })
}

fn is_table_row(line: &str) -> bool {
    match (line.find('|'), line.rfind('|')) {
        (Some(first), Some(last)) => last > first + 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_requires_text_after_separator() {
        assert!(is_heading_line("# Title"));
        assert!(is_heading_line("###### Deep"));
        assert!(!is_heading_line("####### Too deep"));
        assert!(!is_heading_line("#hashtag"));
        assert!(!is_heading_line("# "));
        assert!(!is_heading_line("  # indented"));
    }

    #[test]
    fn list_and_quote_lines_need_a_body() {
        assert!(is_unordered_list_line("- item"));
        assert!(is_unordered_list_line("* item"));
        assert!(is_unordered_list_line("+ item"));
        assert!(!is_unordered_list_line("-item"));
        assert!(!is_unordered_list_line("- "));
        assert!(is_ordered_list_line("12. twelfth"));
        assert!(!is_ordered_list_line("12 twelfth"));
        assert!(!is_ordered_list_line(". nothing"));
        assert!(is_blockquote_line("> quoted"));
        assert!(!is_blockquote_line(">quoted"));
    }

    #[test]
    fn fenced_code_needs_line_leading_opener_and_closer() {
        assert!(has_fenced_code_pair("```rust\nfn main() {}\n```"));
        assert!(has_fenced_code_pair("intro\n```\ncode\n```"));
        assert!(!has_fenced_code_pair("```\nunterminated"));
        assert!(!has_fenced_code_pair("inline ``` only ```"));
    }

    #[test]
    fn links_and_images_need_label_and_target() {
        assert!(has_inline_link("see [docs](https://example.com)", "["));
        assert!(!has_inline_link("see [](https://example.com)", "["));
        assert!(!has_inline_link("see [docs]()", "["));
        assert!(has_inline_link("![logo](logo.png)", "!["));
        assert!(!has_inline_link("[logo](logo.png)", "!["));
        assert!(has_inline_link("a](b [x](y)", "["));
        assert!(!has_inline_link("[x] then ](", "["));
    }

    #[test]
    fn tables_need_two_piped_rows() {
        let table = MarkdownFeatures::scan("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(table.table);
        let single = MarkdownFeatures::scan("| a | b |");
        assert!(!single.table);
        let pipes = MarkdownFeatures::scan("a || b\nc || d");
        assert!(!pipes.table);
    }

    #[test]
    fn feature_count_tallies_distinct_features() {
        let features = MarkdownFeatures::scan(
            "# Notes\n\n- one\n- two\n1. first\n> quote\n[link](https://example.com)",
        );
        assert_eq!(features.count(), 5);
        assert!(!features.image);
        assert!(!features.table);
    }

    #[test]
    fn short_content_needs_one_feature_long_content_needs_two() {
        assert!(is_definitely_markdown("- just one item"));
        assert!(!is_definitely_markdown("plain words only"));

        let filler = "word ".repeat(300);
        let long_single = format!("- item\n{filler}");
        assert!(!is_definitely_markdown(&long_single));

        let long_double = format!("# Title\n- item\n{filler}");
        assert!(is_definitely_markdown(&long_double));
    }
}
