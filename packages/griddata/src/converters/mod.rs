//! Converter chain for extensible editor support.
//!
//! Converters turn the raw JSON of a control into a typed value, the raw
//! config of an editor into a typed config, and a control into a typed
//! wrapper. Converters are kept in a [`ConverterCollection`] and consulted
//! in registration order; the first one that returns `Some` wins.

mod collection;
mod default;
mod wrapper;

use serde_json::Value;

use crate::model::{GridControl, GridEditor};
use crate::values::{GridControlValue, GridEditorConfig};

pub use collection::ConverterCollection;
pub use default::{DefaultConverter, DefaultEditor};
pub use wrapper::{short_type_name, GridControlWrapper, NoConfig, TypeInfo, TypedControl};

/// Trait for grid converters.
///
/// Every method defaults to "no match", so a converter only implements the
/// conversions it cares about. Returning `None` is cheap and expected: it
/// hands the request to the next converter in the chain.
pub trait GridConverter: Send + Sync {
    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Convert the value of a control using `editor`.
    fn convert_control_value(
        &self,
        _editor: &GridEditor,
        _token: &Value,
    ) -> Option<Box<dyn GridControlValue>> {
        None
    }

    /// Convert the raw config of `editor`.
    fn convert_editor_config(
        &self,
        _editor: &GridEditor,
        _token: &Value,
    ) -> Option<Box<dyn GridEditorConfig>> {
        None
    }

    /// Decide the validity of a control value, overriding the value's own rule.
    ///
    /// Consulted for every value of the aliases the converter is registered
    /// for, including values produced by other converters.
    fn is_valid(&self, _editor: &GridEditor, _value: &dyn GridControlValue) -> Option<bool> {
        None
    }

    /// Describe the statically known value (and config) type of `control`.
    ///
    /// Must agree with [`convert_control_value`](Self::convert_control_value):
    /// report a wrapper only for aliases this converter produces values for.
    fn control_wrapper<'a>(&self, _control: &'a GridControl) -> Option<GridControlWrapper<'a>> {
        None
    }
}
