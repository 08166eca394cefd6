//! Strata Table: grid layout for Strata
//!
//! Lays out children in a fixed number of columns and as many rows as they
//! are grouped into, producing a width per column, a height per row, a
//! position per cell and a size for the whole table.
//!
//! # Architecture
//!
//! Column widths come from per-column strategies ([`ColumnWidth`]). Some are
//! pure functions of the container (`Fixed`, `Fraction`), some need to look
//! at the cells (`Wrap`, `MinIntrinsic`, `MaxIntrinsic`), and flexible ones
//! share whatever space is left. A layout pass measures each cell at most
//! once; intrinsic queries answer an ancestor's sizing questions without
//! measuring at all.
//!
//! # Usage
//!
//! ```ignore
//! use strata_table::{ColumnWidth, LayoutConstraints, Table, TableChildren};
//!
//! let mut table = Table::new(2).column_width(|column| match column {
//!     0 => ColumnWidth::wrap(),
//!     _ => ColumnWidth::flex(1.0),
//! });
//!
//! let mut children = TableChildren::new(2);
//! children.row(|column| cell(0, column));
//! children.row(|column| cell(1, column));
//!
//! let layout = table.measure(children.as_slice(), LayoutConstraints::loose(400.0, 300.0))?;
//! ```

// Core primitives
pub mod primitives;
pub mod error;
pub mod config;

// Layout system
pub mod layout;

// Demo runner
pub mod demo;

// Re-export core types
pub use primitives::{Point, Rect, Size};
pub use error::{Result, TableError};
pub use config::TableConfig;

// Layout system exports
pub use layout::{
    Alignment, ColumnCells, ColumnResolver, ColumnWidth, Density, Dp, Inflexible,
    IntrinsicEstimator, LayoutConstraints, Measurable, MeasurementCache, Placeable, Placement,
    ResolvedColumns, Table, TableChild, TableChildren, TableDecoration, TableLayout, TableOffsets,
    TextElement,
};
