//! Media picker value.

use std::any::Any;

use serde_json::{Map, Value};

use super::GridControlValue;
use crate::json::{get_f64, get_i64, get_object, get_string};

/// Focal point of an image, as fractions of its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    pub left: f64,
    pub top: f64,
}

impl FocalPoint {
    fn parse(obj: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            left: get_f64(obj, "left")?,
            top: get_f64(obj, "top")?,
        })
    }
}

/// Value of the media editor.
///
/// Media references carry no prose, so they never contribute searchable text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaValue {
    id: Option<i64>,
    udi: Option<String>,
    image: Option<String>,
    alt_text: Option<String>,
    caption: Option<String>,
    focal_point: Option<FocalPoint>,
}

impl MediaValue {
    /// Parse a media value. Only JSON objects are media references.
    #[must_use]
    pub fn parse(token: &Value) -> Option<Self> {
        let obj = token.as_object()?;

        Some(Self {
            id: get_i64(obj, "id"),
            udi: get_string(obj, "udi").map(String::from),
            image: get_string(obj, "image").map(String::from),
            alt_text: get_string(obj, "altText").map(String::from),
            caption: get_string(obj, "caption").map(String::from),
            focal_point: get_object(obj, "focalPoint").and_then(FocalPoint::parse),
        })
    }

    /// Numeric ID of the media item.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// UDI of the media item (e.g. `umb://media/…`).
    #[must_use]
    pub fn udi(&self) -> Option<&str> {
        self.udi.as_deref()
    }

    /// URL of the image.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    #[must_use]
    pub fn focal_point(&self) -> Option<FocalPoint> {
        self.focal_point
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

impl GridControlValue for MediaValue {
    fn is_valid(&self) -> bool {
        self.id.is_some_and(|id| id > 0) || is_present(self.udi()) || is_present(self.image())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
