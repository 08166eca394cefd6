//! Intrinsic size queries.
//!
//! An ancestor may ask how wide or tall the table would like to be before it
//! settles on final constraints, and may ask several times with different
//! extents. These queries never measure a cell, never touch a pass cache, and
//! never produce placements. They only forward intrinsic questions to the
//! cells, so strategies that need a committed measurement (`Wrap`) answer
//! from the cells' intrinsic widths instead.
//!
//! A table with no rows answers 0 to every query, even when its columns have
//! fixed widths. This matches the committed pass, which lays out an empty
//! table as zero columns wide.

use crate::error::Result;

use super::children::{RowGroups, TableChild};
use super::column_width::ColumnWidth;
use super::length::Density;
use super::measurable::Measurable;
use super::probe::IntrinsicCells;
use super::resolver::ColumnResolver;

/// Answers intrinsic width and height queries for one set of column strategies.
pub struct IntrinsicEstimator<'s> {
    strategies: &'s [ColumnWidth],
    density: Density,
}

impl<'s> IntrinsicEstimator<'s> {
    pub fn new(strategies: &'s [ColumnWidth], density: Density) -> Self {
        Self { strategies, density }
    }

    /// Minimum (`minimise`) or maximum intrinsic width for a given table height.
    ///
    /// Inflexible columns contribute their intrinsic width directly. Flexible
    /// columns are sized together: the result leaves room for every flexible
    /// column to receive at least its intrinsic width as its proportional
    /// share, i.e. `max(width / flex) * total_flex`.
    pub fn intrinsic_width<M: Measurable>(
        &self,
        children: &[TableChild<M>],
        available_height: f32,
        minimise: bool,
    ) -> Result<f32> {
        let rows = RowGroups::partition(children, self.strategies.len())?;
        if rows.rows() == 0 {
            return Ok(0.0);
        }

        let mut total_flex = 0.0f32;
        let mut flexible_space = 0.0f32;
        let mut inflexible_space = 0.0f32;

        for (column, strategy) in self.strategies.iter().enumerate() {
            let mut cells = IntrinsicCells::new(&rows, column);
            // Fractions of an unknown container contribute nothing.
            let width = if minimise {
                strategy.min_intrinsic_width(&mut cells, f32::INFINITY, self.density, available_height)
            } else {
                strategy.max_intrinsic_width(&mut cells, f32::INFINITY, self.density, available_height)
            };

            let flex = strategy.flex_value();
            if flex <= 0.0 {
                inflexible_space += width;
            } else {
                total_flex += flex;
                flexible_space = flexible_space.max(width / flex);
            }
        }

        let width = flexible_space * total_flex + inflexible_space;
        tracing::trace!(
            "intrinsic width (minimise={}) at height {}: {}",
            minimise,
            available_height,
            width
        );
        Ok(width)
    }

    /// Intrinsic height for a given table width.
    ///
    /// Columns are sized as in the committed pass, except that each column
    /// contributes its maximum intrinsic width rather than a measured width.
    /// The table height is the sum over rows of the tallest `height_of` answer
    /// in that row, evaluated at the cell's column width. Pass the cells'
    /// min- or max-intrinsic-height function to answer either query.
    pub fn intrinsic_height<M: Measurable>(
        &self,
        children: &[TableChild<M>],
        available_width: f32,
        height_of: impl Fn(&M, f32) -> f32,
    ) -> Result<f32> {
        let rows = RowGroups::partition(children, self.strategies.len())?;
        if rows.rows() == 0 {
            return Ok(0.0);
        }

        let resolved = ColumnResolver::new(self.strategies).resolve(available_width, |column, strategy| {
            let mut cells = IntrinsicCells::new(&rows, column);
            strategy.max_intrinsic_width(&mut cells, available_width, self.density, f32::INFINITY)
        });

        let mut height = 0.0f32;
        for row in 0..rows.rows() {
            let mut row_height = 0.0f32;
            for (column, &width) in resolved.widths.iter().enumerate() {
                row_height = row_height.max(height_of(rows.cell(row, column), width));
            }
            height += row_height;
        }

        tracing::trace!("intrinsic height at width {}: {}", available_width, height);
        Ok(height)
    }
}

// =========================================================================
// Tests
// =========================================================================
