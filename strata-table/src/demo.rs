//! JSON-driven demo of the table layout.
//!
//! A [`DemoDocument`] bundles a table config, outer constraints and rows of
//! text cells. [`run`] lays it out once and answers the four intrinsic
//! queries, which is what the `table-demo` binary prints.
//!
//! ```json
//! {
//!   "config": { "columns": 2, "column_widths": { "0": "wrap" } },
//!   "constraints": { "max_width": 320.0 },
//!   "rows": [["Name", "Description"], ["strata", "GPU UI engine"]]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::TableConfig;
use crate::error::Result;
use crate::layout::elements::TextElement;
use crate::layout::{LayoutConstraints, Table, TableChildren, TableLayout};

/// Outer constraints with `None` standing for an unbounded maximum.
///
/// JSON has no infinity, so unbounded extents are written by omission.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConstraints {
    pub min_width: f32,
    pub max_width: Option<f32>,
    pub min_height: f32,
    pub max_height: Option<f32>,
}

impl From<DemoConstraints> for LayoutConstraints {
    fn from(c: DemoConstraints) -> Self {
        LayoutConstraints::new(
            c.min_width,
            c.max_width.unwrap_or(f32::INFINITY),
            c.min_height,
            c.max_height.unwrap_or(f32::INFINITY),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoDocument {
    pub config: TableConfig,
    pub constraints: DemoConstraints,
    pub rows: Vec<Vec<String>>,
}

/// Everything the demo computes for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub layout: TableLayout,
    /// At unbounded height.
    pub min_intrinsic_width: f32,
    pub max_intrinsic_width: f32,
    /// At the constraints' container width.
    pub min_intrinsic_height: f32,
    pub max_intrinsic_height: f32,
}

/// Lay out a document.
///
/// Rows shorter than the column count are padded with empty cells and
/// longer rows are truncated, since hand-written documents are rarely exact.
pub fn run(document: &DemoDocument) -> Result<DemoReport> {
    let columns = document.config.columns;
    let density = document.config.density;
    let mut table = Table::from_config(&document.config)?;

    let mut children = TableChildren::new(columns);
    for row in &document.rows {
        if row.len() != columns {
            tracing::debug!("demo row has {} cells, fitting to {}", row.len(), columns);
        }
        children.row(|column| {
            TextElement::new(row.get(column).cloned().unwrap_or_default()).density(density)
        });
    }

    let constraints: LayoutConstraints = document.constraints.into();
    let children = children.as_slice();

    let min_intrinsic_width = table.min_intrinsic_width(children, f32::INFINITY)?;
    let max_intrinsic_width = table.max_intrinsic_width(children, f32::INFINITY)?;
    let min_intrinsic_height = table.min_intrinsic_height(children, constraints.container_width())?;
    let max_intrinsic_height = table.max_intrinsic_height(children, constraints.container_width())?;
    let layout = table.measure(children, constraints)?;

    Ok(DemoReport {
        layout,
        min_intrinsic_width,
        max_intrinsic_width,
        min_intrinsic_height,
        max_intrinsic_height,
    })
}
