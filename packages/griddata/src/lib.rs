//! Griddata - Typed page-builder grid model with an extensible converter chain.
//!
//! This crate parses the JSON of a page-builder grid (sections, rows, areas
//! and controls) into an immutable tree. Control values and editor configs
//! are resolved by an ordered chain of converters, so editors unknown to
//! this crate can be supported by registering a converter.
//!
//! # Example
//!
//! ```
//! use griddata::{GridContext, GridDataModel, WriteSearchableText};
//!
//! let json = r#"{
//!   "sections": [ { "grid": 12, "rows": [ {
//!     "id": "intro",
//!     "areas": [ { "grid": 12, "controls": [
//!       { "value": "<p>Hello <b>world</b></p>", "editor": { "alias": "rte" } },
//!       { "value": { "id": 1001, "image": "/media/cat.jpg" }, "editor": { "alias": "media" } }
//!     ] } ]
//!   } ] } ]
//! }"#;
//!
//! let context = GridContext::default();
//! let grid = GridDataModel::parse(json, &context).unwrap();
//!
//! assert!(grid.is_valid());
//! assert_eq!(grid.searchable_text(&context), vec!["Hello world"]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`json`]: JSON accessors for loosely typed grid nodes
//! - [`values`]: Control values and editor configs
//! - [`converters`]: Converter trait, registry and built-in converter
//! - [`context`]: Immutable context holding culture, converters and options
//! - [`model`]: The grid tree
//! - [`builder`]: JSON → tree construction
//! - [`search`]: Searchable text extraction
//! - [`outline`]: YAML outline of a grid
//! - [`cli`]: Command-line interface

pub mod builder;
pub mod cli;
pub mod config;
pub mod context;
pub mod converters;
pub mod error;
pub mod json;
pub mod model;
pub mod outline;
pub mod search;
pub mod values;

// Re-export commonly used items
pub use context::{ContextOptions, GridContext, GridContextBuilder};
pub use converters::{
    ConverterCollection, DefaultConverter, GridControlWrapper, GridConverter, TypedControl,
};
pub use error::{GridError, Result};
pub use model::{GridArea, GridControl, GridDataModel, GridEditor, GridRow, GridSection, RowIndex};
pub use search::{SearchTextWriter, WriteSearchableText};
pub use values::{GridControlValue, GridEditorConfig};
