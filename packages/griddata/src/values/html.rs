//! HTML values and the rich text editor value built on them.

use std::any::Any;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{GridControlValue, TextValue};
use crate::context::GridContext;
use crate::search::SearchTextWriter;

/// Empty paragraph tags, which the rich text editor emits for an empty document.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAPH_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(p|/p)>").expect("valid regex"));

/// HTML value of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlValue {
    text: TextValue,
}

impl HtmlValue {
    /// Create an HTML value.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            text: TextValue::new(html),
        }
    }

    /// Parse an HTML value from a control token.
    #[must_use]
    pub fn parse(token: &Value) -> Option<Self> {
        TextValue::parse(token).map(|text| Self { text })
    }

    /// The raw HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        self.text.value()
    }
}

impl GridControlValue for HtmlValue {
    /// Valid unless the HTML is blank once paragraph tags are removed.
    fn is_valid(&self) -> bool {
        !PARAGRAPH_TAG.replace_all(self.html(), "").trim().is_empty()
    }

    fn write_searchable_text(&self, _context: &GridContext, writer: &mut SearchTextWriter) {
        writer.write_markup(self.html());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Value of the rich text editor (`rte`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichTextValue {
    html: HtmlValue,
}

impl RichTextValue {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: HtmlValue::new(html),
        }
    }

    #[must_use]
    pub fn parse(token: &Value) -> Option<Self> {
        HtmlValue::parse(token).map(|html| Self { html })
    }

    /// The raw HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        self.html.html()
    }

    /// The underlying HTML value.
    #[must_use]
    pub fn as_html(&self) -> &HtmlValue {
        &self.html
    }
}

impl GridControlValue for RichTextValue {
    fn is_valid(&self) -> bool {
        self.html.is_valid()
    }

    fn write_searchable_text(&self, context: &GridContext, writer: &mut SearchTextWriter) {
        self.html.write_searchable_text(context, writer);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
