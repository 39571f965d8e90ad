//! Grid row: a horizontal band of areas.

use std::collections::BTreeMap;

use crate::context::GridContext;
use crate::search::{SearchTextWriter, WriteSearchableText};

use super::{GridArea, GridControl};

/// Position of a row within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex {
    /// Index of the owning section.
    pub section: usize,
    /// Index of the row within that section.
    pub row: usize,
}

/// A row of a grid section.
///
/// `previous`/`next` link rows in document order, across section boundaries.
#[derive(Debug)]
pub struct GridRow {
    pub(crate) position: RowIndex,
    pub(crate) id: String,
    pub(crate) label: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) config: BTreeMap<String, String>,
    pub(crate) styles: BTreeMap<String, String>,
    pub(crate) areas: Vec<GridArea>,
    pub(crate) previous: Option<RowIndex>,
    pub(crate) next: Option<RowIndex>,
}

impl GridRow {
    pub(crate) fn new(position: RowIndex, id: impl Into<String>) -> Self {
        Self {
            position,
            id: id.into(),
            label: None,
            name: None,
            config: BTreeMap::new(),
            styles: BTreeMap::new(),
            areas: Vec::new(),
            previous: None,
            next: None,
        }
    }

    /// Unique ID of the row.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether a non-blank label has been set.
    #[must_use]
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|l| !l.trim().is_empty())
    }

    /// Name of the row layout.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn position(&self) -> RowIndex {
        self.position
    }

    /// Index of the owning section.
    #[must_use]
    pub fn section(&self) -> usize {
        self.position.section
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
    pub fn areas(&self) -> &[GridArea] {
        &self.areas
    }

    #[must_use]
    pub fn has_areas(&self) -> bool {
        !self.areas.is_empty()
    }

    #[must_use]
    pub fn area(&self, index: usize) -> Option<&GridArea> {
        self.areas.get(index)
    }

    #[must_use]
    pub fn first_area(&self) -> Option<&GridArea> {
        self.areas.first()
    }

    #[must_use]
    pub fn last_area(&self) -> Option<&GridArea> {
        self.areas.last()
    }

    /// The area before `area` in this row.
    #[must_use]
    pub fn previous_area(&self, area: &GridArea) -> Option<&GridArea> {
        area.previous().and_then(|i| self.area(i))
    }

    /// The area after `area` in this row.
    #[must_use]
    pub fn next_area(&self, area: &GridArea) -> Option<&GridArea> {
        area.next().and_then(|i| self.area(i))
    }

    /// Position of the previous row in the document.
    #[must_use]
    pub fn previous(&self) -> Option<RowIndex> {
        self.previous
    }

    /// Position of the next row in the document.
    #[must_use]
    pub fn next(&self) -> Option<RowIndex> {
        self.next
    }

    /// Whether at least one area is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.areas.iter().any(GridArea::is_valid)
    }

    /// All controls of all areas, in order.
    pub fn controls(&self) -> impl Iterator<Item = &GridControl> {
        self.areas.iter().flat_map(|a| a.controls().iter())
    }

    /// Controls using the given editor alias.
    pub fn controls_by_alias<'a>(
        &'a self,
        alias: &'a str,
    ) -> impl Iterator<Item = &'a GridControl> + 'a {
        self.controls().filter(move |c| c.alias() == alias)
    }
}

impl WriteSearchableText for GridRow {
    fn write_searchable_text(&self, context: &GridContext, writer: &mut SearchTextWriter) {
        for area in &self.areas {
            area.write_searchable_text(context, writer);
        }
    }
}
