//! Layout System for Strata tables
//!
//! Arranges children into a fixed number of columns and as many rows as the
//! row groups provide. Column widths come from per-column strategies, rows
//! are as tall as their tallest cell.
//!
//! # Architecture
//!
//! ```text
//! TableChildren -> Table::measure(constraints) -> TableLayout (size, placements)
//!                                              -> TableOffsets (published to decorations)
//! Table::{min,max}_intrinsic_{width,height}    -> one length, nothing committed
//! ```
//!
//! A pass measures each cell at most once. Intrinsic queries never measure.

pub mod cache;
pub mod children;
pub mod column_width;
pub mod constraints;
pub mod decoration;
pub mod elements;
pub mod flex;
pub mod intrinsic;
pub mod length;
pub mod measurable;
pub mod probe;
pub mod resolver;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

// Re-export core types
pub use cache::MeasurementCache;
pub use children::{TableChild, TableChildren};
pub use column_width::{ColumnWidth, Inflexible};
pub use constraints::LayoutConstraints;
pub use decoration::{TableDecoration, TableOffsets};
pub use elements::TextElement;
pub use intrinsic::IntrinsicEstimator;
pub use length::{Alignment, Density, Dp, BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT};
pub use measurable::{Measurable, Placeable};
pub use probe::ColumnCells;
pub use resolver::{ColumnResolver, ResolvedColumns};
pub use table::{Placement, Table, TableLayout};
