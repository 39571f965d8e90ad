//! Builder that turns grid JSON into a [`GridDataModel`].
//!
//! The builder walks the document top-down in a single pass. Each control's
//! value and editor config are resolved through the context's converter
//! chain; after each sibling array is built, one pass wires the
//! `previous`/`next` indices.
//!
//! Missing or non-array child collections are treated as empty. A child that
//! is not a JSON object, a row without `id` or a control without
//! `editor.alias` fails the whole build.

use serde_json::{Map, Value};

use crate::context::GridContext;
use crate::error::{GridError, Result};
use crate::json::{
    child_path, get_array, get_bool, get_dictionary, get_i64, get_object, get_string,
    get_string_array,
};
use crate::model::{
    GridArea, GridControl, GridDataModel, GridEditor, GridRow, GridSection, RowIndex,
};
use crate::values::RawValue;

/// Builds grid trees using the converters of a context.
pub struct GridBuilder<'a> {
    context: &'a GridContext,
}

impl<'a> GridBuilder<'a> {
    #[must_use]
    pub fn new(context: &'a GridContext) -> Self {
        Self { context }
    }

    /// Build a grid from its JSON root.
    ///
    /// A JSON `null` root yields an empty grid.
    ///
    /// # Errors
    /// Returns `InvalidNode` or `MissingField` for malformed structure.
    pub fn build(&self, root: &Value) -> Result<GridDataModel> {
        if root.is_null() {
            return Ok(GridDataModel::empty());
        }
        let obj = expect_object(root, "$")?;

        let sections = get_array(obj, "sections")
            .iter()
            .enumerate()
            .map(|(index, node)| self.build_section(node, index))
            .collect::<Result<Vec<_>>>()?;

        let mut grid = GridDataModel {
            name: get_string(obj, "name").map(String::from),
            sections,
            raw: root.clone(),
        };
        link_rows(&mut grid.sections);

        tracing::debug!(
            sections = grid.sections.len(),
            rows = grid.rows().count(),
            controls = grid.controls().count(),
            "Built grid"
        );
        Ok(grid)
    }

    fn build_section(&self, node: &Value, index: usize) -> Result<GridSection> {
        let path = child_path("", "sections", index);
        let obj = expect_object(node, &path)?;

        let rows = get_array(obj, "rows")
            .iter()
            .enumerate()
            .map(|(row, node)| self.build_row(node, RowIndex { section: index, row }, &path))
            .collect::<Result<Vec<_>>>()?;

        Ok(GridSection {
            index,
            grid: get_i64(obj, "grid").unwrap_or_default(),
            rows,
        })
    }

    fn build_row(&self, node: &Value, position: RowIndex, parent: &str) -> Result<GridRow> {
        let path = child_path(parent, "rows", position.row);
        let obj = expect_object(node, &path)?;
        let id = get_string(obj, "id").ok_or_else(|| GridError::MissingField {
            field: "id",
            path: path.clone(),
        })?;
        tracing::trace!(path = %path, id = %id, "Building row");

        let mut areas = get_array(obj, "areas")
            .iter()
            .enumerate()
            .map(|(index, node)| self.build_area(node, index, &path))
            .collect::<Result<Vec<_>>>()?;
        link_areas(&mut areas);

        let mut row = GridRow::new(position, id);
        row.label = get_string(obj, "label").map(String::from);
        row.name = get_string(obj, "name").map(String::from);
        row.config = get_dictionary(obj, "config");
        row.styles = get_dictionary(obj, "styles");
        row.areas = areas;
        Ok(row)
    }

    fn build_area(&self, node: &Value, index: usize, parent: &str) -> Result<GridArea> {
        let path = child_path(parent, "areas", index);
        let obj = expect_object(node, &path)?;

        let controls = get_array(obj, "controls")
            .iter()
            .enumerate()
            .map(|(index, node)| self.build_control(node, index, &path))
            .collect::<Result<Vec<_>>>()?;

        Ok(GridArea {
            index,
            grid: get_i64(obj, "grid").unwrap_or_default(),
            allow_all: get_bool(obj, "allowAll"),
            allowed: get_string_array(obj, "allowed"),
            config: get_dictionary(obj, "config"),
            styles: get_dictionary(obj, "styles"),
            controls,
            previous: None,
            next: None,
        })
    }

    fn build_control(&self, node: &Value, index: usize, parent: &str) -> Result<GridControl> {
        let path = child_path(parent, "controls", index);
        let obj = expect_object(node, &path)?;
        let editor_obj = get_object(obj, "editor").ok_or_else(|| GridError::MissingField {
            field: "editor",
            path: path.clone(),
        })?;
        let editor = GridEditor::parse(editor_obj, &format!("{path}.editor"))?;

        let token = obj.get("value").unwrap_or(&Value::Null);
        let value = self
            .context
            .resolve_control_value(&editor, token)
            .unwrap_or_else(|| Box::new(RawValue::new(token.clone())));

        let config = editor
            .config()
            .and_then(|raw| self.context.resolve_editor_config(&editor, raw));
        let validity = self.context.resolve_validity(&editor, &*value);

        tracing::trace!(
            path = %path,
            alias = %editor.alias(),
            value_type = value.type_name(),
            "Built control"
        );

        Ok(GridControl {
            index,
            editor,
            value,
            config,
            validity,
        })
    }
}

fn expect_object<'v>(node: &'v Value, path: &str) -> Result<&'v Map<String, Value>> {
    node.as_object().ok_or_else(|| GridError::InvalidNode {
        path: path.to_string(),
        expected: "object",
    })
}

/// Link areas of one row in order.
fn link_areas(areas: &mut [GridArea]) {
    let count = areas.len();
    for (i, area) in areas.iter_mut().enumerate() {
        area.previous = i.checked_sub(1);
        area.next = (i + 1 < count).then_some(i + 1);
    }
}

/// Link all rows of the document in order, across section boundaries.
fn link_rows(sections: &mut [GridSection]) {
    let positions: Vec<RowIndex> = sections
        .iter()
        .flat_map(|s| s.rows.iter().map(GridRow::position))
        .collect();

    for (i, position) in positions.iter().enumerate() {
        let row = &mut sections[position.section].rows[position.row];
        row.previous = i.checked_sub(1).map(|p| positions[p]);
        row.next = positions.get(i + 1).copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{RichTextValue, TextConfig, TextValue};
    use serde_json::json;

    fn build(value: Value) -> Result<GridDataModel> {
        let context = GridContext::default();
        GridBuilder::new(&context).build(&value)
    }

    fn row(id: &str, areas: usize) -> Value {
        let areas: Vec<Value> = (0..areas)
            .map(|_| json!({ "grid": 6, "controls": [] }))
            .collect();
        json!({ "id": id, "areas": areas })
    }

    #[test]
    fn test_build_null_root() {
        let grid = build(Value::Null).unwrap();
        assert!(!grid.has_sections());
    }

    #[test]
    fn test_build_rejects_non_object_root() {
        let err = build(json!([1, 2])).unwrap_err();
        assert!(matches!(err, GridError::InvalidNode { ref path, .. } if path == "$"));
    }

    #[test]
    fn test_missing_arrays_are_empty() {
        let grid = build(json!({ "sections": [ { "grid": 12 } ] })).unwrap();
        assert_eq!(grid.sections()[0].grid(), 12);
        assert!(!grid.sections()[0].has_rows());

        let grid = build(json!({ "sections": "nope" })).unwrap();
        assert!(!grid.has_sections());
    }

    #[test]
    fn test_row_requires_id() {
        let err = build(json!({ "sections": [ { "rows": [ { "name": "x" } ] } ] })).unwrap_err();
        match err {
            GridError::MissingField { field, path } => {
                assert_eq!(field, "id");
                assert_eq!(path, "sections[0].rows[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_object_child_fails() {
        let err = build(json!({ "sections": [ { "rows": [ row("a", 1), 42 ] } ] })).unwrap_err();
        assert!(matches!(err, GridError::InvalidNode { ref path, .. } if path == "sections[0].rows[1]"));
    }

    #[test]
    fn test_control_requires_editor_alias() {
        let grid = json!({ "sections": [ { "rows": [ {
            "id": "r",
            "areas": [ { "controls": [ { "value": "x", "editor": { "name": "No alias" } } ] } ]
        } ] } ] });
        let err = build(grid).unwrap_err();
        assert!(matches!(
            err,
            GridError::MissingField { field: "alias", ref path } if path == "sections[0].rows[0].areas[0].controls[0].editor"
        ));
    }

    #[test]
    fn test_link_areas() {
        let grid = build(json!({ "sections": [ { "rows": [ row("r", 3) ] } ] })).unwrap();
        let areas = grid.sections()[0].rows()[0].areas();

        assert_eq!(areas[0].previous(), None);
        assert_eq!(areas[0].next(), Some(1));
        assert_eq!(areas[1].previous(), Some(0));
        assert_eq!(areas[1].next(), Some(2));
        assert_eq!(areas[2].previous(), Some(1));
        assert_eq!(areas[2].next(), None);
    }

    #[test]
    fn test_link_rows_across_sections() {
        let grid = build(json!({ "sections": [
            { "rows": [ row("a", 0), row("b", 0) ] },
            { "rows": [] },
            { "rows": [ row("c", 0) ] }
        ] }))
        .unwrap();

        let ids = |index: Option<RowIndex>| index.and_then(|i| grid.row(i)).map(|r| r.id().to_string());
        let a = grid.row_by_id("a").unwrap();
        let b = grid.row_by_id("b").unwrap();
        let c = grid.row_by_id("c").unwrap();

        assert_eq!(ids(a.previous()), None);
        assert_eq!(ids(a.next()).as_deref(), Some("b"));
        assert_eq!(ids(b.next()).as_deref(), Some("c"));
        assert_eq!(ids(c.previous()).as_deref(), Some("b"));
        assert_eq!(ids(c.next()), None);
        assert_eq!(c.section(), 2);
    }

    #[test]
    fn test_controls_resolve_through_chain() {
        let grid = build(json!({ "sections": [ { "rows": [ {
            "id": "r",
            "areas": [ { "controls": [
                { "value": "<p>Body</p>", "editor": { "alias": "rte" } },
                {
                    "value": "Title",
                    "editor": { "alias": "headline", "config": { "markup": "<h1>#value#</h1>" } }
                },
                { "value": { "custom": true }, "editor": { "alias": "myGallery" } }
            ] } ]
        } ] } ] }))
        .unwrap();

        let controls: Vec<&GridControl> = grid.controls().collect();
        assert_eq!(controls.len(), 3);
        assert!(controls[0].value().is::<RichTextValue>());
        assert!(controls[1].value().is::<TextValue>());
        assert!(controls[1].config_as::<TextConfig>().is_some());
        assert!(controls[2].value().is::<RawValue>());
        assert!(controls[2].config().is_none());
        assert_eq!(controls[2].index(), 2);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let grid = build(json!({
            "name": "Layout",
            "unknown": [1, 2, 3],
            "sections": [ { "grid": "12", "extra": {}, "rows": [] } ]
        }))
        .unwrap();
        assert_eq!(grid.name(), Some("Layout"));
        assert_eq!(grid.sections()[0].grid(), 12);
    }
}
