//! Passthrough value for editors no converter recognizes.

use std::any::Any;

use serde_json::Value;

use super::GridControlValue;
use crate::json::is_empty_token;

/// Raw JSON value of a control whose editor has no converter.
#[derive(Debug, Clone, PartialEq)]
pub struct RawValue {
    token: Value,
}

impl RawValue {
    #[must_use]
    pub fn new(token: Value) -> Self {
        Self { token }
    }

    /// The untouched JSON token.
    #[must_use]
    pub fn token(&self) -> &Value {
        &self.token
    }
}

impl GridControlValue for RawValue {
    fn is_valid(&self) -> bool {
        !is_empty_token(&self.token)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
