//! Editor config of the headline and quote editors.

use std::any::Any;

use serde_json::Value;

use super::GridEditorConfig;
use crate::json::get_string;

/// Placeholder in [`TextConfig::markup`] replaced by the control text.
const VALUE_PLACEHOLDER: &str = "#value#";

/// Display options of a text editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextConfig {
    style: Option<String>,
    markup: Option<String>,
}

impl TextConfig {
    /// Parse a text config. Only JSON objects are configs.
    #[must_use]
    pub fn parse(token: &Value) -> Option<Self> {
        let obj = token.as_object()?;

        Some(Self {
            style: get_string(obj, "style").map(String::from),
            markup: get_string(obj, "markup").map(String::from),
        })
    }

    /// Inline CSS applied to the text.
    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Markup template, e.g. `<h1>#value#</h1>`.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// Render `text` through the markup template.
    ///
    /// Without a template the text is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use griddata::values::TextConfig;
    /// use serde_json::json;
    ///
    /// let config = TextConfig::parse(&json!({ "markup": "<h2>#value#</h2>" })).unwrap();
    /// assert_eq!(config.apply_markup("Title"), "<h2>Title</h2>");
    /// ```
    #[must_use]
    pub fn apply_markup(&self, text: &str) -> String {
        match self.markup.as_deref() {
            Some(markup) if markup.contains(VALUE_PLACEHOLDER) => {
                markup.replace(VALUE_PLACEHOLDER, text)
            }
            _ => text.to_string(),
        }
    }
}

impl GridEditorConfig for TextConfig {
    fn is_valid(&self) -> bool {
        self.style.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.markup.as_deref().is_some_and(|m| !m.trim().is_empty())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
