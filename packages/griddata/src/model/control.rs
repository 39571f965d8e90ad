//! Grid control: the leaf of the grid holding a resolved value.

use crate::context::GridContext;
use crate::converters::{NoConfig, TypedControl};
use crate::search::{SearchTextWriter, WriteSearchableText};
use crate::values::{GridControlValue, GridEditorConfig};

use super::GridEditor;

/// A control within a grid area.
///
/// Every control has exactly one value. Editors that no converter recognizes
/// get a [`RawValue`](crate::values::RawValue).
#[derive(Debug)]
pub struct GridControl {
    pub(crate) index: usize,
    pub(crate) editor: GridEditor,
    pub(crate) value: Box<dyn GridControlValue>,
    pub(crate) config: Option<Box<dyn GridEditorConfig>>,
    /// Validity decided by a converter, overriding the value's own rule.
    pub(crate) validity: Option<bool>,
}

impl GridControl {
    /// Create a control from already resolved parts.
    #[must_use]
    pub fn new(
        editor: GridEditor,
        value: Box<dyn GridControlValue>,
        config: Option<Box<dyn GridEditorConfig>>,
    ) -> Self {
        Self {
            index: 0,
            editor,
            value,
            config,
            validity: None,
        }
    }

    /// Override the value's validity rule with a fixed result.
    #[must_use]
    pub fn with_validity(mut self, validity: Option<bool>) -> Self {
        self.validity = validity;
        self
    }

    /// Position of the control within its area.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn editor(&self) -> &GridEditor {
        &self.editor
    }

    /// Shorthand for `self.editor().alias()`.
    #[must_use]
    pub fn alias(&self) -> &str {
        self.editor.alias()
    }

    #[must_use]
    pub fn value(&self) -> &dyn GridControlValue {
        self.value.as_ref()
    }

    /// The resolved editor config, if the editor defines one.
    #[must_use]
    pub fn config(&self) -> Option<&dyn GridEditorConfig> {
        self.config.as_deref()
    }

    /// Whether the control is valid.
    ///
    /// A converter override takes precedence over the value's own rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity.unwrap_or_else(|| self.value.is_valid())
    }

    /// The value as `V`, if that is its resolved type.
    #[must_use]
    pub fn value_as<V: GridControlValue>(&self) -> Option<&V> {
        self.value().downcast_ref::<V>()
    }

    /// The config as `C`, if present and of that type.
    #[must_use]
    pub fn config_as<C: GridEditorConfig>(&self) -> Option<&C> {
        self.config().and_then(|c| c.downcast_ref::<C>())
    }

    /// Typed view of the control.
    ///
    /// Returns `None` if the resolved value is not a `V`.
    #[must_use]
    pub fn wrapper<V: GridControlValue>(&self) -> Option<TypedControl<'_, V, NoConfig>> {
        Some(TypedControl {
            control: self,
            value: self.value_as::<V>()?,
            config: None,
        })
    }

    /// Typed view of the control including its config.
    ///
    /// Returns `None` if the resolved value is not a `V`. The config is
    /// `None` when absent or not a `C`.
    #[must_use]
    pub fn wrapper_with_config<V: GridControlValue, C: GridEditorConfig>(
        &self,
    ) -> Option<TypedControl<'_, V, C>> {
        Some(TypedControl {
            control: self,
            value: self.value_as::<V>()?,
            config: self.config_as::<C>(),
        })
    }
}

impl WriteSearchableText for GridControl {
    fn write_searchable_text(&self, context: &GridContext, writer: &mut SearchTextWriter) {
        if !context.options().index_invalid_controls && !self.is_valid() {
            return;
        }
        self.value.write_searchable_text(context, writer);
        if let Some(config) = &self.config {
            config.write_searchable_text(context, writer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{HtmlValue, MediaValue, RawValue, TextConfig, TextValue};
    use serde_json::json;

    fn headline() -> GridControl {
        GridControl::new(
            GridEditor::new("headline"),
            Box::new(TextValue::new("Welcome")),
            Some(Box::new(TextConfig::parse(&json!({ "markup": "<h1>#value#</h1>" })).unwrap())),
        )
    }

    #[test]
    fn test_wrapper_matches_value_type() {
        let control = headline();
        let typed = control.wrapper::<TextValue>().unwrap();
        assert_eq!(typed.value.value(), "Welcome");
        assert!(typed.config.is_none());
        assert!(control.wrapper::<MediaValue>().is_none());
    }

    #[test]
    fn test_wrapper_with_config() {
        let control = headline();
        let typed = control.wrapper_with_config::<TextValue, TextConfig>().unwrap();
        let config = typed.config.unwrap();
        assert_eq!(config.apply_markup(typed.value.value()), "<h1>Welcome</h1>");
    }

    #[test]
    fn test_raw_control_has_no_typed_wrapper() {
        let control = GridControl::new(
            GridEditor::new("unknown"),
            Box::new(RawValue::new(json!({ "x": 1 }))),
            None,
        );
        assert!(control.wrapper::<HtmlValue>().is_none());
        assert!(control.wrapper::<RawValue>().is_some());
        assert!(control.is_valid());
    }

    #[derive(Debug)]
    struct DraftValue;

    impl GridControlValue for DraftValue {
        fn is_valid(&self) -> bool {
            false
        }

        fn write_searchable_text(&self, _context: &GridContext, writer: &mut SearchTextWriter) {
            writer.write_line("draft");
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[derive(Debug)]
    struct CaptionConfig;

    impl GridEditorConfig for CaptionConfig {
        fn is_valid(&self) -> bool {
            true
        }

        fn write_searchable_text(&self, _context: &GridContext, writer: &mut SearchTextWriter) {
            writer.write_line("Config caption");
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_config_text_follows_value_text() {
        let control = GridControl::new(
            GridEditor::new("headline"),
            Box::new(TextValue::new("Title")),
            Some(Box::new(CaptionConfig)),
        );
        let context = GridContext::default();
        assert_eq!(control.searchable_text(&context), vec!["Title", "Config caption"]);
    }

    #[test]
    fn test_validity_override() {
        let control = GridControl::new(GridEditor::new("draft"), Box::new(DraftValue), None);
        assert!(!control.is_valid());
        assert!(control.with_validity(Some(true)).is_valid());

        let control = headline().with_validity(Some(false));
        assert!(!control.is_valid());
        assert!(headline().with_validity(None).is_valid());
    }

    #[test]
    fn test_invalid_control_search_text_follows_option() {
        let control = GridControl::new(GridEditor::new("draft"), Box::new(DraftValue), None);

        let context = GridContext::default();
        assert_eq!(control.searchable_text(&context), vec!["draft".to_string()]);

        let context = GridContext::builder()
            .index_invalid_controls(false)
            .build()
            .unwrap();
        assert!(control.searchable_text(&context).is_empty());
    }
}
