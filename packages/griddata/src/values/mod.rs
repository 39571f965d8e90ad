//! Control values and editor configs.
//!
//! Converters turn the raw JSON of a control into one of these capability
//! types. The built-in variants cover the default editors; third-party
//! converters can add their own by implementing [`GridControlValue`] or
//! [`GridEditorConfig`].

mod embed;
mod html;
mod macro_value;
mod media;
mod raw;
mod text;
mod text_config;

use std::any::Any;
use std::fmt;

use crate::context::GridContext;
use crate::search::SearchTextWriter;

pub use embed::EmbedValue;
pub use html::{HtmlValue, RichTextValue};
pub use macro_value::MacroValue;
pub use media::{FocalPoint, MediaValue};
pub use raw::RawValue;
pub use text::TextValue;
pub use text_config::TextConfig;

/// Value of a grid control.
pub trait GridControlValue: Any + fmt::Debug + Send + Sync {
    /// Whether the value holds meaningful content.
    fn is_valid(&self) -> bool;

    /// Append searchable text for this value. Contributes nothing by default.
    fn write_searchable_text(&self, _context: &GridContext, _writer: &mut SearchTextWriter) {}

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Access as [`Any`] for typed downcasts.
    fn as_any(&self) -> &dyn Any;
}

impl dyn GridControlValue {
    /// Check whether the value is of type `T`.
    #[must_use]
    pub fn is<T: GridControlValue>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to a concrete value type.
    #[must_use]
    pub fn downcast_ref<T: GridControlValue>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Config of a grid editor.
pub trait GridEditorConfig: Any + fmt::Debug + Send + Sync {
    /// Whether the config holds meaningful content.
    fn is_valid(&self) -> bool;

    /// Append searchable text for this config. Contributes nothing by default.
    fn write_searchable_text(&self, _context: &GridContext, _writer: &mut SearchTextWriter) {}

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Access as [`Any`] for typed downcasts.
    fn as_any(&self) -> &dyn Any;
}

impl dyn GridEditorConfig {
    /// Check whether the config is of type `T`.
    #[must_use]
    pub fn is<T: GridEditorConfig>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to a concrete config type.
    #[must_use]
    pub fn downcast_ref<T: GridEditorConfig>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
