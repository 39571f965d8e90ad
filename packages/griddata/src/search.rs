//! Searchable text extraction.
//!
//! Every level of the grid implements [`WriteSearchableText`]. Sections, rows
//! and areas have no text of their own and only recurse into their children;
//! control values decide what (if anything) ends up in the index.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::context::{ContextOptions, GridContext};

/// Any tag, matched lazily so adjacent tags are replaced one by one.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Replace every markup tag with a single space.
///
/// # Examples
/// ```
/// use griddata::search::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), " Hello  world  ");
/// assert_eq!(strip_tags("plain"), "plain");
/// ```
pub fn strip_tags(markup: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(markup, " ")
}

/// Collapse whitespace runs into single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Line sink for searchable text.
///
/// Lines are NFC-normalized on the way in and blank lines are dropped.
#[derive(Debug, Clone, Default)]
pub struct SearchTextWriter {
    lines: Vec<String>,
    normalize_whitespace: bool,
}

impl SearchTextWriter {
    /// Create a writer that keeps whitespace as written.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer configured by the context options.
    #[must_use]
    pub fn with_options(options: &ContextOptions) -> Self {
        Self {
            lines: Vec::new(),
            normalize_whitespace: options.normalize_whitespace,
        }
    }

    /// Append one line of plain text.
    pub fn write_line(&mut self, text: &str) {
        let normalized: String = text.nfc().collect();
        let line = if self.normalize_whitespace {
            collapse_whitespace(&normalized)
        } else {
            normalized
        };

        if !line.trim().is_empty() {
            self.lines.push(line);
        }
    }

    /// Append one line of markup, with tags replaced by spaces.
    pub fn write_markup(&mut self, markup: &str) {
        self.write_line(&strip_tags(markup));
    }

    /// Lines written so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take ownership of the written lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Depth-first searchable text traversal.
pub trait WriteSearchableText {
    /// Write this node's contribution (and its children's) to `writer`.
    fn write_searchable_text(&self, context: &GridContext, writer: &mut SearchTextWriter);

    /// Collect the searchable text into a fresh writer.
    ///
    /// The traversal does not touch the tree, so calling this twice yields
    /// the same lines.
    fn searchable_text(&self, context: &GridContext) -> Vec<String> {
        let mut writer = SearchTextWriter::with_options(context.options());
        self.write_searchable_text(context, &mut writer);
        writer.into_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_with_attributes() {
        assert_eq!(strip_tags(r#"<a href="/x">link</a>"#), " link ");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Hello \n\t world  "), "Hello world");
    }

    #[test]
    fn test_writer_drops_blank_lines() {
        let mut writer = SearchTextWriter::new();
        writer.write_line("   ");
        writer.write_markup("<p></p>");
        writer.write_line("kept");
        assert_eq!(writer.lines(), ["kept"]);
    }

    #[test]
    fn test_writer_keeps_whitespace_by_default() {
        let mut writer = SearchTextWriter::new();
        writer.write_markup("<p>Hello <b>world</b></p>");
        assert_eq!(writer.into_lines(), vec![" Hello  world  ".to_string()]);
    }

    #[test]
    fn test_writer_normalizes_whitespace() {
        let options = ContextOptions {
            normalize_whitespace: true,
            ..ContextOptions::default()
        };
        let mut writer = SearchTextWriter::with_options(&options);
        writer.write_markup("<p>Hello <b>world</b></p>");
        assert_eq!(writer.into_lines(), vec!["Hello world".to_string()]);
    }

    #[test]
    fn test_writer_composes_unicode() {
        let mut writer = SearchTextWriter::new();
        writer.write_line("Cafe\u{301}");
        assert_eq!(writer.lines(), ["Caf\u{e9}"]);
    }
}
