//! Ordered registry of grid converters.

use std::fmt;

use serde_json::Value;

use super::wrapper::GridControlWrapper;
use super::GridConverter;
use crate::model::{GridControl, GridEditor};
use crate::values::{GridControlValue, GridEditorConfig};

/// Which editor aliases a registration applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AliasScope {
    /// Consulted for every alias.
    Any,
    /// Consulted only for one alias.
    Alias(String),
}

impl AliasScope {
    fn matches(&self, alias: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Alias(a) => a == alias,
        }
    }
}

struct Registration {
    scope: AliasScope,
    converter: Box<dyn GridConverter>,
}

/// Registry of converters, queried in insertion order.
///
/// Declaration order is priority: when two converters both accept an alias,
/// the one registered first wins. There is no notion of specificity, so an
/// alias-scoped converter registered after a wildcard one that also matches
/// is never reached.
///
/// The collection is configured before it is moved into a
/// [`GridContext`](crate::GridContext) and is read-only from then on.
#[derive(Default)]
pub struct ConverterCollection {
    registrations: Vec<Registration>,
}

impl ConverterCollection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter consulted for every editor alias.
    pub fn register(&mut self, converter: impl GridConverter + 'static) {
        self.push(AliasScope::Any, Box::new(converter));
    }

    /// Register a converter consulted only for `alias`.
    pub fn register_for(&mut self, alias: impl Into<String>, converter: impl GridConverter + 'static) {
        self.push(AliasScope::Alias(alias.into()), Box::new(converter));
    }

    /// Register a wildcard converter ahead of all existing ones.
    pub fn insert_first(&mut self, converter: impl GridConverter + 'static) {
        self.prepend(AliasScope::Any, Box::new(converter));
    }

    /// Register a converter for `alias` ahead of all existing ones.
    pub fn insert_first_for(
        &mut self,
        alias: impl Into<String>,
        converter: impl GridConverter + 'static,
    ) {
        self.prepend(AliasScope::Alias(alias.into()), Box::new(converter));
    }

    fn prepend(&mut self, scope: AliasScope, converter: Box<dyn GridConverter>) {
        self.registrations.insert(0, Registration { scope, converter });
    }

    fn push(&mut self, scope: AliasScope, converter: Box<dyn GridConverter>) {
        self.registrations.push(Registration { scope, converter });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Names of the registered converters, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.registrations.iter().map(|r| r.converter.name()).collect()
    }

    /// Converters consulted for `alias`, in order.
    pub fn candidates<'a>(&'a self, alias: &'a str) -> impl Iterator<Item = &'a dyn GridConverter> {
        self.registrations
            .iter()
            .filter(move |r| r.scope.matches(alias))
            .map(|r| r.converter.as_ref())
    }

    /// Resolve the value of a control.
    ///
    /// Returns `None` when no converter accepts the editor; callers fall back
    /// to a raw value.
    #[must_use]
    pub fn resolve_control_value(
        &self,
        editor: &GridEditor,
        token: &Value,
    ) -> Option<Box<dyn GridControlValue>> {
        let alias = editor.alias();
        let found = self.candidates(alias).find_map(|converter| {
            let value = converter.convert_control_value(editor, token)?;
            tracing::debug!(
                converter = converter.name(),
                alias = %alias,
                value_type = value.type_name(),
                "Converted control value"
            );
            Some(value)
        });

        if found.is_none() {
            tracing::debug!(alias = %alias, "No converter for control value");
        }
        found
    }

    /// Resolve the config of an editor.
    ///
    /// `None` means the editor has no typed config.
    #[must_use]
    pub fn resolve_editor_config(
        &self,
        editor: &GridEditor,
        token: &Value,
    ) -> Option<Box<dyn GridEditorConfig>> {
        let alias = editor.alias();
        self.candidates(alias).find_map(|converter| {
            let config = converter.convert_editor_config(editor, token)?;
            tracing::debug!(
                converter = converter.name(),
                alias = %alias,
                config_type = config.type_name(),
                "Converted editor config"
            );
            Some(config)
        })
    }

    /// Resolve a validity override for a control value.
    ///
    /// `None` means the value's own rule applies.
    #[must_use]
    pub fn resolve_validity(
        &self,
        editor: &GridEditor,
        value: &dyn GridControlValue,
    ) -> Option<bool> {
        let alias = editor.alias();
        self.candidates(alias).find_map(|converter| {
            let valid = converter.is_valid(editor, value)?;
            tracing::debug!(
                converter = converter.name(),
                alias = %alias,
                valid,
                "Overrode control validity"
            );
            Some(valid)
        })
    }

    /// Resolve the typed wrapper descriptor of a control.
    #[must_use]
    pub fn resolve_wrapper<'a>(&self, control: &'a GridControl) -> Option<GridControlWrapper<'a>> {
        self.candidates(control.alias())
            .find_map(|converter| converter.control_wrapper(control))
    }
}

impl fmt::Debug for ConverterCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.registrations
                    .iter()
                    .map(|r| (r.converter.name(), r.scope.clone())),
            )
            .finish()
    }
}
