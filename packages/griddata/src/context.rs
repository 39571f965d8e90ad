//! Grid context threaded through parsing and text extraction.
//!
//! A context bundles the culture, the converter chain and feature flags. It
//! is built once through [`GridContextBuilder`] and never changes afterwards,
//! so one context can be shared by any number of parses and readers.

use std::fmt;

use serde_json::Value;

use crate::config::{validate_culture, DEFAULT_CULTURE};
use crate::converters::{ConverterCollection, DefaultConverter, GridControlWrapper, GridConverter};
use crate::error::Result;
use crate::model::{GridControl, GridEditor};
use crate::values::{GridControlValue, GridEditorConfig};

/// Feature flags of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    /// Collapse whitespace runs and trim searchable text lines.
    pub normalize_whitespace: bool,
    /// Include controls whose value is not valid in searchable text.
    pub index_invalid_controls: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
            index_invalid_controls: true,
        }
    }
}

/// Immutable configuration for grid operations.
pub struct GridContext {
    culture: String,
    converters: ConverterCollection,
    options: ContextOptions,
}

impl GridContext {
    /// Start building a context.
    #[must_use]
    pub fn builder() -> GridContextBuilder {
        GridContextBuilder::new()
    }

    /// Culture name, e.g. `en-US`.
    #[must_use]
    pub fn culture(&self) -> &str {
        &self.culture
    }

    #[must_use]
    pub fn converters(&self) -> &ConverterCollection {
        &self.converters
    }

    #[must_use]
    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Resolve the value of a control through the converter chain.
    #[must_use]
    pub fn resolve_control_value(
        &self,
        editor: &GridEditor,
        token: &Value,
    ) -> Option<Box<dyn GridControlValue>> {
        self.converters.resolve_control_value(editor, token)
    }

    /// Resolve an editor config through the converter chain.
    #[must_use]
    pub fn resolve_editor_config(
        &self,
        editor: &GridEditor,
        token: &Value,
    ) -> Option<Box<dyn GridEditorConfig>> {
        self.converters.resolve_editor_config(editor, token)
    }

    /// Resolve a validity override for a control value through the converter chain.
    #[must_use]
    pub fn resolve_validity(
        &self,
        editor: &GridEditor,
        value: &dyn GridControlValue,
    ) -> Option<bool> {
        self.converters.resolve_validity(editor, value)
    }

    /// Resolve the wrapper descriptor of a control through the converter chain.
    #[must_use]
    pub fn resolve_wrapper<'a>(&self, control: &'a GridControl) -> Option<GridControlWrapper<'a>> {
        self.converters.resolve_wrapper(control)
    }
}

impl Default for GridContext {
    /// Default culture, default options, only the built-in converter.
    fn default() -> Self {
        let mut converters = ConverterCollection::new();
        converters.register(DefaultConverter);
        Self {
            culture: DEFAULT_CULTURE.to_string(),
            converters,
            options: ContextOptions::default(),
        }
    }
}

impl fmt::Debug for GridContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridContext")
            .field("culture", &self.culture)
            .field("converters", &self.converters.names())
            .field("options", &self.options)
            .finish()
    }
}

/// Builder for [`GridContext`].
///
/// Converters are consulted in the order they are added; the built-in
/// [`DefaultConverter`] is appended after them unless excluded.
///
/// # Example
///
/// ```
/// use griddata::GridContext;
///
/// let context = GridContext::builder()
///     .culture("da-DK")
///     .normalize_whitespace(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(context.culture(), "da-DK");
/// assert_eq!(context.converters().names(), vec!["default"]);
/// ```
pub struct GridContextBuilder {
    culture: String,
    converters: ConverterCollection,
    include_default_converter: bool,
    options: ContextOptions,
}

impl GridContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            culture: DEFAULT_CULTURE.to_string(),
            converters: ConverterCollection::new(),
            include_default_converter: true,
            options: ContextOptions::default(),
        }
    }

    #[must_use]
    pub fn culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    /// Add a converter consulted for every alias.
    #[must_use]
    pub fn converter(mut self, converter: impl GridConverter + 'static) -> Self {
        self.converters.register(converter);
        self
    }

    /// Add a converter consulted only for `alias`.
    #[must_use]
    pub fn converter_for(
        mut self,
        alias: impl Into<String>,
        converter: impl GridConverter + 'static,
    ) -> Self {
        self.converters.register_for(alias, converter);
        self
    }

    /// Use a preconfigured collection. Converters added earlier are discarded.
    #[must_use]
    pub fn converters(mut self, converters: ConverterCollection) -> Self {
        self.converters = converters;
        self
    }

    /// Do not append the built-in [`DefaultConverter`].
    #[must_use]
    pub fn without_default_converter(mut self) -> Self {
        self.include_default_converter = false;
        self
    }

    #[must_use]
    pub fn normalize_whitespace(mut self, enabled: bool) -> Self {
        self.options.normalize_whitespace = enabled;
        self
    }

    #[must_use]
    pub fn index_invalid_controls(mut self, enabled: bool) -> Self {
        self.options.index_invalid_controls = enabled;
        self
    }

    /// Build the context.
    ///
    /// # Errors
    /// Returns `InvalidCulture` if the culture is not a language tag.
    pub fn build(self) -> Result<GridContext> {
        validate_culture(&self.culture)?;

        let mut converters = self.converters;
        if self.include_default_converter {
            converters.register(DefaultConverter);
        }

        Ok(GridContext {
            culture: self.culture,
            converters,
            options: self.options,
        })
    }
}

impl Default for GridContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    struct NamedConverter;

    impl GridConverter for NamedConverter {
        fn name(&self) -> &str {
            "named"
        }
    }

    #[test]
    fn test_default_context() {
        let context = GridContext::default();
        assert_eq!(context.culture(), DEFAULT_CULTURE);
        assert_eq!(context.converters().names(), vec!["default"]);
        assert_eq!(*context.options(), ContextOptions::default());
    }

    #[test]
    fn test_builder_appends_default_converter_last() {
        let context = GridContext::builder()
            .converter(NamedConverter)
            .build()
            .unwrap();
        assert_eq!(context.converters().names(), vec!["named", "default"]);
    }

    #[test]
    fn test_builder_without_default_converter() {
        let context = GridContext::builder()
            .without_default_converter()
            .build()
            .unwrap();
        assert!(context.converters().is_empty());
    }

    #[test]
    fn test_builder_rejects_invalid_culture() {
        let err = GridContext::builder().culture("not a culture").build().unwrap_err();
        assert!(matches!(err, GridError::InvalidCulture(_)));
    }

    #[test]
    fn test_context_and_tree_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridContext>();
        assert_send_sync::<crate::model::GridDataModel>();
        assert_send_sync::<crate::model::GridControl>();
    }
}
