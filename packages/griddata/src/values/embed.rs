//! Embed editor value (oEmbed result).

use std::any::Any;

use serde_json::Value;

use super::GridControlValue;
use crate::json::{get_bool, get_i64, get_string};

/// Value of the embed editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbedValue {
    url: Option<String>,
    preview: String,
    width: Option<i64>,
    height: Option<i64>,
    constrain: bool,
    info: Option<String>,
}

impl EmbedValue {
    /// Parse an embed value. Only JSON objects are embeds.
    #[must_use]
    pub fn parse(token: &Value) -> Option<Self> {
        let obj = token.as_object()?;

        Some(Self {
            url: get_string(obj, "url").map(String::from),
            preview: get_string(obj, "preview").unwrap_or_default().to_string(),
            width: get_i64(obj, "width"),
            height: get_i64(obj, "height"),
            constrain: get_bool(obj, "constrain"),
            info: get_string(obj, "info").map(String::from),
        })
    }

    /// Source URL of the embedded resource.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// HTML snippet to render.
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    #[must_use]
    pub fn width(&self) -> Option<i64> {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Option<i64> {
        self.height
    }

    /// Whether the aspect ratio should be kept when resizing.
    #[must_use]
    pub fn constrain(&self) -> bool {
        self.constrain
    }

    #[must_use]
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }
}

impl GridControlValue for EmbedValue {
    fn is_valid(&self) -> bool {
        !self.preview.trim().is_empty()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
