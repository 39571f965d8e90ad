//! Grid section: a top-level column of rows.

use crate::context::GridContext;
use crate::search::{SearchTextWriter, WriteSearchableText};

use super::{GridControl, GridRow};

/// A section of the grid.
#[derive(Debug, Default)]
pub struct GridSection {
    pub(crate) index: usize,
    pub(crate) grid: i64,
    pub(crate) rows: Vec<GridRow>,
}

impl GridSection {
    /// Position of the section within the document.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of grid columns the section spans.
    #[must_use]
    pub fn grid(&self) -> i64 {
        self.grid
    }

    #[must_use]
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    #[must_use]
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Whether at least one row is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rows.iter().any(GridRow::is_valid)
    }

    /// All controls of all rows, in order.
    pub fn controls(&self) -> impl Iterator<Item = &GridControl> {
        self.rows.iter().flat_map(|row| row.controls())
    }
}

impl WriteSearchableText for GridSection {
    fn write_searchable_text(&self, context: &GridContext, writer: &mut SearchTextWriter) {
        for row in &self.rows {
            row.write_searchable_text(context, writer);
        }
    }
}
