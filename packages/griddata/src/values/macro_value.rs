//! Macro editor value.

use std::any::Any;

use serde_json::{Map, Value};

use super::GridControlValue;
use crate::json::{get_object, get_string};

/// Value of the macro editor: a macro alias plus its parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MacroValue {
    alias: String,
    parameters: Map<String, Value>,
}

impl MacroValue {
    /// Parse a macro value. Only JSON objects are macros.
    #[must_use]
    pub fn parse(token: &Value) -> Option<Self> {
        let obj = token.as_object()?;

        Some(Self {
            alias: get_string(obj, "macroAlias").unwrap_or_default().to_string(),
            parameters: get_object(obj, "macroParamsDictionary")
                .cloned()
                .unwrap_or_default(),
        })
    }

    /// Alias of the macro to render.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Macro parameters keyed by parameter alias.
    #[must_use]
    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Get a single parameter.
    #[must_use]
    pub fn parameter(&self, alias: &str) -> Option<&Value> {
        self.parameters.get(alias)
    }
}

impl GridControlValue for MacroValue {
    fn is_valid(&self) -> bool {
        !self.alias.trim().is_empty()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
