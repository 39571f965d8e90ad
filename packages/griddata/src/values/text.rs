//! Plain text value used by the headline and quote editors.

use std::any::Any;

use serde_json::Value;

use super::GridControlValue;
use crate::context::GridContext;
use crate::search::SearchTextWriter;

/// Text value of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValue {
    value: String,
}

impl TextValue {
    /// Create a text value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Parse a text value from a control token.
    ///
    /// Strings, numbers and null are accepted; structured tokens are not text.
    #[must_use]
    pub fn parse(token: &Value) -> Option<Self> {
        match token {
            Value::Null => Some(Self::new("")),
            Value::String(s) => Some(Self::new(s.as_str())),
            Value::Number(n) => Some(Self::new(n.to_string())),
            _ => None,
        }
    }

    /// The raw text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl GridControlValue for TextValue {
    fn is_valid(&self) -> bool {
        !self.value.trim().is_empty()
    }

    fn write_searchable_text(&self, _context: &GridContext, writer: &mut SearchTextWriter) {
        writer.write_markup(&self.value);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
