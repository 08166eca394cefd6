//! Table - children arranged into rows and columns.
//!
//! A pass runs in a fixed order:
//!
//! ```text
//! group children by row
//!   -> resolve column widths (may measure cells unbounded)
//!   -> measure remaining cells at their column width
//!   -> row heights, offsets (republish if changed)
//!   -> container size, placements
//! ```
//!
//! Every cell is measured at most once per pass: a cell measured while
//! resolving a `Wrap` column is reused when finalizing, unless its column
//! ended up narrower than that measurement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TableConfig;
use crate::error::Result;
use crate::primitives::{Rect, Size};

use super::cache::MeasurementCache;
use super::children::{RowGroups, TableChild};
use super::column_width::ColumnWidth;
use super::constraints::LayoutConstraints;
use super::decoration::{TableDecoration, TableOffsets};
use super::intrinsic::IntrinsicEstimator;
use super::length::{Alignment, Density};
use super::measurable::{Measurable, Placeable};
use super::probe::MeasuringCells;
use super::resolver::ColumnResolver;

/// Absolute bounds of one cell after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub rect: Rect,
}

/// The committed result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLayout {
    /// Container size, clamped into the outer constraints.
    pub size: Size,
    pub column_widths: Vec<f32>,
    pub row_heights: Vec<f32>,
    pub offsets: TableOffsets,
    /// Row-major, one per cell.
    pub placements: Vec<Placement>,
    /// Whether this pass published new offsets.
    pub offsets_changed: bool,
    /// Number of `measure` calls made during the pass.
    pub measure_count: usize,
    overflow: Option<Size>,
}

impl TableLayout {
    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }

    pub fn columns(&self) -> usize {
        self.column_widths.len()
    }

    pub fn placement(&self, row: usize, column: usize) -> Option<&Placement> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        self.placements.get(row * self.columns() + column)
    }

    /// How far the content extends past the outer max constraints, if at all.
    ///
    /// Oversized content is not an error: the container size is still clamped
    /// and cells keep their positions.
    pub fn overflow(&self) -> Option<Size> {
        self.overflow
    }
}

/// A grid layout with a fixed number of columns and one row per row group.
pub struct Table {
    columns: usize,
    column_width: Box<dyn Fn(usize) -> ColumnWidth>,
    alignment: Alignment,
    density: Density,
    published: TableOffsets,
    decorations: Vec<Box<dyn TableDecoration>>,
}

impl Table {
    /// A table where every column is `Flex(1)` and cells sit at the top left.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            column_width: Box::new(|_| ColumnWidth::default()),
            alignment: Alignment::default(),
            density: Density::default(),
            published: TableOffsets::default(),
            decorations: Vec::new(),
        }
    }

    pub fn from_config(config: &TableConfig) -> Result<Self> {
        config.validate()?;
        let widths = config.clone();
        Ok(Self::new(config.columns)
            .column_width(move |column| widths.column_width(column))
            .alignment(config.alignment)
            .density(config.density))
    }

    /// Set the strategy for each column. Evaluated once per column per pass.
    pub fn column_width(mut self, column_width: impl Fn(usize) -> ColumnWidth + 'static) -> Self {
        self.column_width = Box::new(column_width);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn add_decoration(&mut self, decoration: impl TableDecoration + 'static) {
        self.decorations.push(Box::new(decoration));
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Offsets published by the most recent pass that changed them.
    pub fn offsets(&self) -> &TableOffsets {
        &self.published
    }

    fn strategies(&self) -> Vec<ColumnWidth> {
        (0..self.columns).map(|column| (self.column_width)(column)).collect()
    }

    /// Run one committed layout pass.
    ///
    /// Fails before measuring anything if a row does not have exactly
    /// `columns` children.
    pub fn measure<M: Measurable>(
        &mut self,
        children: &[TableChild<M>],
        constraints: LayoutConstraints,
    ) -> Result<TableLayout> {
        let rows = RowGroups::partition(children, self.columns)?;

        if rows.rows() == 0 {
            let offsets = TableOffsets::from_extents(&[], &[]);
            let offsets_changed = self.publish(&offsets);
            return Ok(TableLayout {
                size: constraints.constrain(Size::ZERO),
                column_widths: Vec::new(),
                row_heights: Vec::new(),
                offsets,
                placements: Vec::new(),
                offsets_changed,
                measure_count: 0,
                overflow: None,
            });
        }

        let strategies = self.strategies();
        let density = self.density;
        let container_width = constraints.container_width();
        let mut cache = MeasurementCache::new(rows.rows(), self.columns);

        // Compute column widths and collect flex information.
        let column_widths = ColumnResolver::new(&strategies)
            .resolve(container_width, |column, strategy| {
                let mut cells = MeasuringCells::new(&rows, column, &mut cache);
                strategy.preferred_width(&mut cells, container_width, density)
            })
            .widths;

        // Measure the remaining children and calculate row heights.
        let mut placeables = Vec::with_capacity(rows.rows() * self.columns);
        let mut row_heights = vec![0.0f32; rows.rows()];
        for (row, row_height) in row_heights.iter_mut().enumerate() {
            for (column, &width) in column_widths.iter().enumerate() {
                let placeable = finalize_cell(&rows, &mut cache, row, column, width);
                *row_height = row_height.max(placeable.height());
                placeables.push(placeable);
            }
        }

        let offsets = TableOffsets::from_extents(&row_heights, &column_widths);
        let offsets_changed = self.publish(&offsets);

        let content = Size::new(offsets.width(), offsets.height());
        let size = constraints.constrain(content);
        let overflow = overflow(content, &constraints);
        if let Some(excess) = overflow {
            tracing::warn!(
                "table content {}x{} exceeds constraints by {}x{}",
                content.width,
                content.height,
                excess.width,
                excess.height
            );
        }

        let placements = self.place(&placeables, &column_widths, &row_heights, &offsets);

        tracing::debug!(
            "table pass: {} rows x {} columns, size {}x{}, {} measurements, offsets changed: {}",
            rows.rows(),
            self.columns,
            size.width,
            size.height,
            cache.measurements(),
            offsets_changed
        );

        Ok(TableLayout {
            size,
            column_widths,
            row_heights,
            offsets,
            placements,
            offsets_changed,
            measure_count: cache.measurements(),
            overflow,
        })
    }

    /// Narrowest width at which the table can lay out at the given height.
    pub fn min_intrinsic_width<M: Measurable>(
        &self,
        children: &[TableChild<M>],
        height: f32,
    ) -> Result<f32> {
        let strategies = self.strategies();
        IntrinsicEstimator::new(&strategies, self.density).intrinsic_width(children, height, true)
    }

    /// Width beyond which the table gains nothing, at the given height.
    pub fn max_intrinsic_width<M: Measurable>(
        &self,
        children: &[TableChild<M>],
        height: f32,
    ) -> Result<f32> {
        let strategies = self.strategies();
        IntrinsicEstimator::new(&strategies, self.density).intrinsic_width(children, height, false)
    }

    pub fn min_intrinsic_height<M: Measurable>(
        &self,
        children: &[TableChild<M>],
        width: f32,
    ) -> Result<f32> {
        let strategies = self.strategies();
        IntrinsicEstimator::new(&strategies, self.density)
            .intrinsic_height(children, width, |cell, w| cell.min_intrinsic_height(w))
    }

    pub fn max_intrinsic_height<M: Measurable>(
        &self,
        children: &[TableChild<M>],
        width: f32,
    ) -> Result<f32> {
        let strategies = self.strategies();
        IntrinsicEstimator::new(&strategies, self.density)
            .intrinsic_height(children, width, |cell, w| cell.max_intrinsic_height(w))
    }

    /// Replace the published offsets if they changed, notifying decorations.
    fn publish(&mut self, offsets: &TableOffsets) -> bool {
        if self.published == *offsets {
            return false;
        }
        self.published = offsets.clone();
        for decoration in &mut self.decorations {
            decoration.offsets_changed(&self.published);
        }
        true
    }

    fn place(
        &self,
        placeables: &[Placeable],
        column_widths: &[f32],
        row_heights: &[f32],
        offsets: &TableOffsets,
    ) -> Vec<Placement> {
        let columns = column_widths.len();
        placeables
            .iter()
            .enumerate()
            .map(|(index, placeable)| {
                let (row, column) = (index / columns, index % columns);
                let slack = Size::new(
                    column_widths[column] - placeable.width(),
                    row_heights[row] - placeable.height(),
                );
                let position = self.alignment.align(slack);
                Placement {
                    row,
                    column,
                    rect: placeable.place(
                        offsets.columns[column] + position.x,
                        offsets.rows[row] + position.y,
                    ),
                }
            })
            .collect()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("alignment", &self.alignment)
            .field("density", &self.density)
            .field("published", &self.published)
            .field("decorations", &self.decorations.len())
            .finish()
    }
}

/// The placeable a cell is laid out with.
///
/// Reuses the measurement taken during column resolution when it fits the
/// final column width.
fn finalize_cell<M: Measurable>(
    rows: &RowGroups<'_, M>,
    cache: &mut MeasurementCache,
    row: usize,
    column: usize,
    width: f32,
) -> Placeable {
    match cache.get(row, column) {
        Some(placeable) if placeable.width() <= width => return placeable,
        Some(placeable) => {
            tracing::debug!(
                "re-measuring cell ({}, {}): measured {} wide, column is {}",
                row,
                column,
                placeable.width(),
                width
            );
        }
        None => {}
    }

    let placeable = rows
        .cell(row, column)
        .measure(LayoutConstraints::with_max_width(width));
    tracing::trace!(
        "measured cell ({}, {}) at width {}: {}x{}",
        row,
        column,
        width,
        placeable.width(),
        placeable.height()
    );
    cache.insert(row, column, placeable);
    placeable
}

fn overflow(content: Size, constraints: &LayoutConstraints) -> Option<Size> {
    let excess = Size::new(
        (content.width - constraints.max_width).max(0.0),
        (content.height - constraints.max_height).max(0.0),
    );
    if excess.width > 0.0 || excess.height > 0.0 {
        Some(excess)
    } else {
        None
    }
}
