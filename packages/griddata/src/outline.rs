//! YAML outline of a grid, used by the `outline` command.

use serde::Serialize;

use crate::context::GridContext;
use crate::converters::short_type_name;
use crate::error::Result;
use crate::model::{GridArea, GridControl, GridDataModel, GridRow, GridSection};

/// Serializable summary of a grid.
#[derive(Debug, Serialize)]
pub struct GridOutline {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    valid: bool,
    sections: Vec<SectionOutline>,
}

#[derive(Debug, Serialize)]
struct SectionOutline {
    grid: i64,
    valid: bool,
    rows: Vec<RowOutline>,
}

#[derive(Debug, Serialize)]
struct RowOutline {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    valid: bool,
    areas: Vec<AreaOutline>,
}

#[derive(Debug, Serialize)]
struct AreaOutline {
    grid: i64,
    valid: bool,
    controls: Vec<ControlOutline>,
}

#[derive(Debug, Serialize)]
struct ControlOutline {
    alias: String,
    value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wrapper: Option<&'static str>,
    valid: bool,
}

impl GridOutline {
    /// Summarize a grid, resolving wrappers through the context's converters.
    #[must_use]
    pub fn new(grid: &GridDataModel, context: &GridContext) -> Self {
        Self {
            name: grid.name().map(String::from),
            valid: grid.is_valid(),
            sections: grid
                .sections()
                .iter()
                .map(|s| SectionOutline::new(s, context))
                .collect(),
        }
    }

    /// Render the outline as YAML.
    ///
    /// # Errors
    /// Returns `YamlSerialization` if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

impl SectionOutline {
    fn new(section: &GridSection, context: &GridContext) -> Self {
        Self {
            grid: section.grid(),
            valid: section.is_valid(),
            rows: section.rows().iter().map(|r| RowOutline::new(r, context)).collect(),
        }
    }
}

impl RowOutline {
    fn new(row: &GridRow, context: &GridContext) -> Self {
        Self {
            id: row.id().to_string(),
            name: row.name().map(String::from),
            label: row.label().map(String::from),
            valid: row.is_valid(),
            areas: row.areas().iter().map(|a| AreaOutline::new(a, context)).collect(),
        }
    }
}

impl AreaOutline {
    fn new(area: &GridArea, context: &GridContext) -> Self {
        Self {
            grid: area.grid(),
            valid: area.is_valid(),
            controls: area
                .controls()
                .iter()
                .map(|c| ControlOutline::new(c, context))
                .collect(),
        }
    }
}

impl ControlOutline {
    fn new(control: &GridControl, context: &GridContext) -> Self {
        Self {
            alias: control.alias().to_string(),
            value: short_type_name(control.value().type_name()),
            config: control.config().map(|c| short_type_name(c.type_name())),
            wrapper: context
                .resolve_wrapper(control)
                .map(|w| w.value_type().short_name()),
            valid: control.is_valid(),
        }
    }
}
