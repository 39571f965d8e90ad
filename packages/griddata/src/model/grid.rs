//! Grid document root.

use serde_json::Value;

use crate::builder::GridBuilder;
use crate::context::GridContext;
use crate::error::Result;
use crate::search::{SearchTextWriter, WriteSearchableText};

use super::{GridControl, GridRow, GridSection, RowIndex};

/// Root of a parsed grid.
///
/// Built once by [`GridDataModel::parse`] or [`GridDataModel::from_json`]
/// and read-only afterwards.
#[derive(Debug, Default)]
pub struct GridDataModel {
    pub(crate) name: Option<String>,
    pub(crate) sections: Vec<GridSection>,
    pub(crate) raw: Value,
}

impl GridDataModel {
    /// Parse grid JSON text.
    ///
    /// Blank input yields an empty model.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or the grid structure is malformed.
    ///
    /// # Examples
    /// ```
    /// use griddata::{GridContext, GridDataModel};
    ///
    /// let context = GridContext::default();
    /// let json = r#"{ "name": "1 column layout", "sections": [ { "grid": 12, "rows": [] } ] }"#;
    /// let grid = GridDataModel::parse(json, &context).unwrap();
    ///
    /// assert_eq!(grid.name(), Some("1 column layout"));
    /// assert_eq!(grid.sections().len(), 1);
    /// assert!(!grid.is_valid());
    /// ```
    pub fn parse(json: &str, context: &GridContext) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::empty());
        }
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value, context)
    }

    /// Build a grid from already parsed JSON.
    ///
    /// # Errors
    /// Returns an error if the grid structure is malformed.
    pub fn from_json(value: &Value, context: &GridContext) -> Result<Self> {
        GridBuilder::new(context).build(value)
    }

    /// An empty grid without sections.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Name of the grid layout.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The JSON the grid was built from.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn sections(&self) -> &[GridSection] {
        &self.sections
    }

    #[must_use]
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Whether at least one section is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sections.iter().any(GridSection::is_valid)
    }

    /// All rows in document order.
    pub fn rows(&self) -> impl Iterator<Item = &GridRow> {
        self.sections.iter().flat_map(|s| s.rows().iter())
    }

    /// Look up a row by position.
    #[must_use]
    pub fn row(&self, index: RowIndex) -> Option<&GridRow> {
        self.sections.get(index.section)?.rows().get(index.row)
    }

    /// Find a row by its ID.
    #[must_use]
    pub fn row_by_id(&self, id: &str) -> Option<&GridRow> {
        self.rows().find(|r| r.id() == id)
    }

    /// The row before `row` in document order.
    #[must_use]
    pub fn previous_row(&self, row: &GridRow) -> Option<&GridRow> {
        row.previous().and_then(|i| self.row(i))
    }

    /// The row after `row` in document order.
    #[must_use]
    pub fn next_row(&self, row: &GridRow) -> Option<&GridRow> {
        row.next().and_then(|i| self.row(i))
    }

    /// All controls in document order.
    pub fn controls(&self) -> impl Iterator<Item = &GridControl> {
        self.sections.iter().flat_map(|s| s.controls())
    }

    /// Controls using the given editor alias.
    pub fn controls_by_alias<'a>(
        &'a self,
        alias: &'a str,
    ) -> impl Iterator<Item = &'a GridControl> + 'a {
        self.controls().filter(move |c| c.alias() == alias)
    }
}

impl WriteSearchableText for GridDataModel {
    fn write_searchable_text(&self, context: &GridContext, writer: &mut SearchTextWriter) {
        for section in &self.sections {
            section.write_searchable_text(context, writer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_parse_blank_input() {
        let context = GridContext::default();
        let grid = GridDataModel::parse("  \n", &context).unwrap();
        assert!(!grid.has_sections());
        assert!(!grid.is_valid());
        assert!(grid.raw().is_null());
    }

    #[test]
    fn test_parse_invalid_json() {
        let context = GridContext::default();
        let err = GridDataModel::parse("{ \"sections\": [", &context).unwrap_err();
        assert!(matches!(err, GridError::Json(_)));
    }

    #[test]
    fn test_empty_grid_has_no_search_text() {
        let context = GridContext::default();
        assert!(GridDataModel::empty().searchable_text(&context).is_empty());
    }
}
