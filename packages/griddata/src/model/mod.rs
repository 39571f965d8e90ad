//! Grid object tree: document → sections → rows → areas → controls.
//!
//! Parents own their children. Sibling links (`previous`/`next`) are plain
//! indices set once by the builder, so the tree has no reference cycles.

mod area;
mod control;
mod editor;
mod grid;
mod row;
mod section;

pub use area::GridArea;
pub use control::GridControl;
pub use editor::GridEditor;
pub use grid::GridDataModel;
pub use row::{GridRow, RowIndex};
pub use section::GridSection;
