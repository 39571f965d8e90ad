//! Grid area: a column within a row.

use std::collections::BTreeMap;

use crate::context::GridContext;
use crate::search::{SearchTextWriter, WriteSearchableText};

use super::GridControl;

/// An area (column) of a row, holding controls.
#[derive(Debug, Default)]
pub struct GridArea {
    pub(crate) index: usize,
    pub(crate) grid: i64,
    pub(crate) allow_all: bool,
    pub(crate) allowed: Vec<String>,
    pub(crate) config: BTreeMap<String, String>,
    pub(crate) styles: BTreeMap<String, String>,
    pub(crate) controls: Vec<GridControl>,
    pub(crate) previous: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl GridArea {
    /// Position of the area within its row.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of grid columns the area spans.
    #[must_use]
    pub fn grid(&self) -> i64 {
        self.grid
    }

    /// Whether every editor may be used in this area.
    #[must_use]
    pub fn allow_all(&self) -> bool {
        self.allow_all
    }

    /// Editor aliases allowed in this area when [`allow_all`](Self::allow_all) is off.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Check whether an editor may be placed in this area.
    #[must_use]
    pub fn allows(&self, alias: &str) -> bool {
        self.allow_all || self.allowed.iter().any(|a| a == alias)
    }

    #[must_use]
    pub fn config(&self) -> &BTreeMap<String, String> {
        &self.config
    }

    #[must_use]
    pub fn styles(&self) -> &BTreeMap<String, String> {
        &self.styles
    }

    #[must_use]
    pub fn controls(&self) -> &[GridControl] {
        &self.controls
    }

    #[must_use]
    pub fn has_controls(&self) -> bool {
        !self.controls.is_empty()
    }

    #[must_use]
    pub fn first_control(&self) -> Option<&GridControl> {
        self.controls.first()
    }

    #[must_use]
    pub fn last_control(&self) -> Option<&GridControl> {
        self.controls.last()
    }

    /// Index of the previous area in the same row.
    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Index of the next area in the same row.
    #[must_use]
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Whether at least one control is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.controls.iter().any(GridControl::is_valid)
    }

    /// Controls using the given editor alias.
    pub fn controls_by_alias<'a>(
        &'a self,
        alias: &'a str,
    ) -> impl Iterator<Item = &'a GridControl> + 'a {
        self.controls.iter().filter(move |c| c.alias() == alias)
    }
}

impl WriteSearchableText for GridArea {
    fn write_searchable_text(&self, context: &GridContext, writer: &mut SearchTextWriter) {
        for control in &self.controls {
            control.write_searchable_text(context, writer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridEditor;
    use crate::values::{HtmlValue, RawValue};
    use serde_json::json;

    fn control(alias: &str, html: &str) -> GridControl {
        GridControl::new(GridEditor::new(alias), Box::new(HtmlValue::new(html)), None)
    }

    #[test]
    fn test_empty_area_is_invalid() {
        let area = GridArea::default();
        assert!(!area.is_valid());
        assert!(!area.has_controls());
        assert!(area.first_control().is_none());
    }

    #[test]
    fn test_area_validity_is_any_control() {
        let area = GridArea {
            controls: vec![control("rte", "<p></p>"), control("rte", "<p>text</p>")],
            ..GridArea::default()
        };
        assert!(area.is_valid());

        let area = GridArea {
            controls: vec![
                control("rte", "<p></p>"),
                GridControl::new(GridEditor::new("x"), Box::new(RawValue::new(json!(null))), None),
            ],
            ..GridArea::default()
        };
        assert!(!area.is_valid());
    }

    #[test]
    fn test_allows() {
        let area = GridArea {
            allowed: vec!["rte".to_string(), "media".to_string()],
            ..GridArea::default()
        };
        assert!(area.allows("media"));
        assert!(!area.allows("macro"));

        let area = GridArea {
            allow_all: true,
            ..GridArea::default()
        };
        assert!(area.allows("macro"));
    }

    #[test]
    fn test_controls_by_alias() {
        let area = GridArea {
            controls: vec![control("rte", "a"), control("quote", "b"), control("rte", "c")],
            ..GridArea::default()
        };
        let found: Vec<usize> = area.controls_by_alias("rte").map(|c| c.index()).collect();
        assert_eq!(found.len(), 2);
    }
}
