//! Converter for the editors that ship with the grid.

use serde_json::Value;

use super::wrapper::GridControlWrapper;
use super::GridConverter;
use crate::config::{
    EDITOR_EMBED, EDITOR_HEADLINE, EDITOR_MACRO, EDITOR_MEDIA, EDITOR_QUOTE, EDITOR_RTE,
};
use crate::model::{GridControl, GridEditor};
use crate::values::{
    EmbedValue, GridControlValue, GridEditorConfig, MacroValue, MediaValue, RichTextValue,
    TextConfig, TextValue,
};

/// Built-in editor kinds, keyed by alias.
///
/// Value, config and wrapper resolution all go through [`DefaultEditor::from_alias`]
/// so the three stay in agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultEditor {
    /// `media`
    Media,
    /// `embed`
    Embed,
    /// `rte`
    RichText,
    /// `macro`
    Macro,
    /// `headline` and `quote`
    Text,
}

impl DefaultEditor {
    /// Map an editor alias to a built-in editor kind.
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            EDITOR_MEDIA => Some(Self::Media),
            EDITOR_EMBED => Some(Self::Embed),
            EDITOR_RTE => Some(Self::RichText),
            EDITOR_MACRO => Some(Self::Macro),
            EDITOR_HEADLINE | EDITOR_QUOTE => Some(Self::Text),
            _ => None,
        }
    }
}

fn boxed<V: GridControlValue>(value: V) -> Box<dyn GridControlValue> {
    Box::new(value)
}

/// Converter for the default editors (and their values and configs).
///
/// Registered last by [`GridContext`](crate::GridContext) unless excluded, so
/// custom converters registered before it can override any of its aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl GridConverter for DefaultConverter {
    fn name(&self) -> &str {
        "default"
    }

    fn convert_control_value(
        &self,
        editor: &GridEditor,
        token: &Value,
    ) -> Option<Box<dyn GridControlValue>> {
        match DefaultEditor::from_alias(editor.alias())? {
            DefaultEditor::Media => MediaValue::parse(token).map(boxed),
            DefaultEditor::Embed => EmbedValue::parse(token).map(boxed),
            DefaultEditor::RichText => RichTextValue::parse(token).map(boxed),
            DefaultEditor::Macro => MacroValue::parse(token).map(boxed),
            DefaultEditor::Text => TextValue::parse(token).map(boxed),
        }
    }

    fn convert_editor_config(
        &self,
        editor: &GridEditor,
        token: &Value,
    ) -> Option<Box<dyn GridEditorConfig>> {
        match DefaultEditor::from_alias(editor.alias())? {
            DefaultEditor::Text => {
                TextConfig::parse(token).map(|c| Box::new(c) as Box<dyn GridEditorConfig>)
            }
            _ => None,
        }
    }

    fn control_wrapper<'a>(&self, control: &'a GridControl) -> Option<GridControlWrapper<'a>> {
        match DefaultEditor::from_alias(control.alias())? {
            DefaultEditor::Media => GridControlWrapper::of::<MediaValue>(control),
            DefaultEditor::Embed => GridControlWrapper::of::<EmbedValue>(control),
            DefaultEditor::RichText => GridControlWrapper::of::<RichTextValue>(control),
            DefaultEditor::Macro => GridControlWrapper::of::<MacroValue>(control),
            DefaultEditor::Text => GridControlWrapper::with_config::<TextValue, TextConfig>(control),
        }
    }
}
