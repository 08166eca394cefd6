//! Lazy measurement probes handed to column width strategies.
//!
//! A strategy sees one column at a time through [`ColumnCells`] and asks for
//! exactly the measurements it needs. Nothing is measured up front, so a
//! `Fixed` or `Fraction` column never touches its cells.
//!
//! Two implementations exist:
//! - [`MeasuringCells`] backs the committed pass. Preferred widths measure the
//!   cell with unbounded constraints and land in the [`MeasurementCache`],
//!   where the second pass picks them up.
//! - [`IntrinsicCells`] backs intrinsic queries. It only forwards intrinsic
//!   questions and never produces a placeable.

use super::cache::{IntrinsicKey, IntrinsicKind, MeasurementCache};
use super::children::RowGroups;
use super::constraints::LayoutConstraints;
use super::measurable::Measurable;

/// On-demand measurements for the cells of one column, indexed by row.
pub trait ColumnCells {
    /// Number of cells (rows) in the column.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of the cell when measured without a width bound.
    fn preferred_width(&mut self, row: usize) -> f32;

    /// Minimum intrinsic width of the cell for the given height.
    fn min_intrinsic_width(&mut self, row: usize, height: f32) -> f32;

    /// Maximum intrinsic width of the cell for the given height.
    fn max_intrinsic_width(&mut self, row: usize, height: f32) -> f32;
}

/// Probes for the committed pass.
pub(crate) struct MeasuringCells<'c, 'a, M> {
    rows: &'c RowGroups<'a, M>,
    column: usize,
    cache: &'c mut MeasurementCache,
}

impl<'c, 'a, M: Measurable> MeasuringCells<'c, 'a, M> {
    pub(crate) fn new(
        rows: &'c RowGroups<'a, M>,
        column: usize,
        cache: &'c mut MeasurementCache,
    ) -> Self {
        Self { rows, column, cache }
    }

    fn intrinsic(&mut self, row: usize, kind: IntrinsicKind, height: f32) -> f32 {
        let key = IntrinsicKey::new(row, self.column, kind, height);
        if let Some(width) = self.cache.intrinsic(key) {
            return width;
        }
        let cell = self.rows.cell(row, self.column);
        let width = match kind {
            IntrinsicKind::MinWidth => cell.min_intrinsic_width(height),
            IntrinsicKind::MaxWidth => cell.max_intrinsic_width(height),
        };
        self.cache.insert_intrinsic(key, width);
        width
    }
}

impl<M: Measurable> ColumnCells for MeasuringCells<'_, '_, M> {
    fn len(&self) -> usize {
        self.rows.rows()
    }

    fn preferred_width(&mut self, row: usize) -> f32 {
        if let Some(placeable) = self.cache.get(row, self.column) {
            return placeable.width();
        }
        let placeable = self
            .rows
            .cell(row, self.column)
            .measure(LayoutConstraints::UNBOUNDED);
        tracing::trace!(
            "measured cell ({}, {}) unbounded: {}x{}",
            row,
            self.column,
            placeable.width(),
            placeable.height()
        );
        self.cache.insert(row, self.column, placeable);
        placeable.width()
    }

    fn min_intrinsic_width(&mut self, row: usize, height: f32) -> f32 {
        self.intrinsic(row, IntrinsicKind::MinWidth, height)
    }

    fn max_intrinsic_width(&mut self, row: usize, height: f32) -> f32 {
        self.intrinsic(row, IntrinsicKind::MaxWidth, height)
    }
}

/// Probes for intrinsic queries.
pub(crate) struct IntrinsicCells<'c, 'a, M> {
    rows: &'c RowGroups<'a, M>,
    column: usize,
}

impl<'c, 'a, M: Measurable> IntrinsicCells<'c, 'a, M> {
    pub(crate) fn new(rows: &'c RowGroups<'a, M>, column: usize) -> Self {
        Self { rows, column }
    }
}

impl<M: Measurable> ColumnCells for IntrinsicCells<'_, '_, M> {
    fn len(&self) -> usize {
        self.rows.rows()
    }

    // Intrinsic evaluation never consults preferred widths; answering a query
    // must not force a committed measurement.
    fn preferred_width(&mut self, _row: usize) -> f32 {
        0.0
    }

    fn min_intrinsic_width(&mut self, row: usize, height: f32) -> f32 {
        self.rows.cell(row, self.column).min_intrinsic_width(height)
    }

    fn max_intrinsic_width(&mut self, row: usize, height: f32) -> f32 {
        self.rows.cell(row, self.column).max_intrinsic_width(height)
    }
}
