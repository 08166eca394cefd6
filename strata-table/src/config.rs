//! Declarative table configuration.
//!
//! Everything a [`Table`](crate::layout::Table) needs besides its children,
//! in a form that can be loaded from JSON:
//!
//! ```json
//! {
//!   "columns": 3,
//!   "alignment": { "horizontal": 0.0, "vertical": -1.0 },
//!   "default_column_width": { "flex": 1.0 },
//!   "column_widths": { "0": "wrap", "2": { "fixed": 120.0 } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::layout::{Alignment, ColumnWidth, Density};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub columns: usize,
    pub alignment: Alignment,
    pub density: Density,
    /// Strategy for every column without an override.
    pub default_column_width: ColumnWidth,
    /// Per-column overrides, keyed by column index.
    pub column_widths: BTreeMap<usize, ColumnWidth>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            alignment: Alignment::default(),
            density: Density::default(),
            default_column_width: ColumnWidth::default(),
            column_widths: BTreeMap::new(),
        }
    }
}

impl TableConfig {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Override the strategy of one column.
    pub fn with_column(mut self, column: usize, width: ColumnWidth) -> Self {
        self.column_widths.insert(column, width);
        self
    }

    /// The strategy in effect for `column`.
    pub fn column_width(&self, column: usize) -> ColumnWidth {
        self.column_widths
            .get(&column)
            .unwrap_or(&self.default_column_width)
            .clone()
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(TableError::InvalidConfig(
                "a table needs at least one column".to_string(),
            ));
        }
        if let Some((&column, _)) = self.column_widths.range(self.columns..).next() {
            return Err(TableError::InvalidConfig(format!(
                "width given for column {} but the table has {} columns",
                column, self.columns
            )));
        }
        Ok(())
    }
}
