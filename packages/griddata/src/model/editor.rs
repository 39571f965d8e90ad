//! Editor descriptor of a control.

use serde_json::{Map, Value};

use crate::error::{GridError, Result};
use crate::json::get_string;

/// Metadata describing which editor produced a control.
///
/// Editors carry no behaviour; converters dispatch on [`GridEditor::alias`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridEditor {
    alias: String,
    name: Option<String>,
    view: Option<String>,
    render: Option<String>,
    icon: Option<String>,
    config: Option<Value>,
}

impl GridEditor {
    /// Create an editor descriptor with only an alias.
    #[must_use]
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::default()
        }
    }

    /// Attach a raw editor config.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Parse an editor object. The `alias` is required.
    pub(crate) fn parse(obj: &Map<String, Value>, path: &str) -> Result<Self> {
        let alias = get_string(obj, "alias").ok_or_else(|| GridError::MissingField {
            field: "alias",
            path: path.to_string(),
        })?;

        Ok(Self {
            alias: alias.to_string(),
            name: get_string(obj, "name").map(String::from),
            view: get_string(obj, "view").map(String::from),
            render: get_string(obj, "render").map(String::from),
            icon: get_string(obj, "icon").map(String::from),
            config: obj.get("config").filter(|c| !c.is_null()).cloned(),
        })
    }

    /// Alias identifying the editor (e.g. `rte`, `media`).
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Backoffice view used to edit the control.
    #[must_use]
    pub fn view(&self) -> Option<&str> {
        self.view.as_deref()
    }

    /// Path of the partial view used to render the control.
    #[must_use]
    pub fn render(&self) -> Option<&str> {
        self.render.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Raw editor config, resolved into a typed config by the converter chain.
    #[must_use]
    pub fn config(&self) -> Option<&Value> {
        self.config.as_ref()
    }
}
