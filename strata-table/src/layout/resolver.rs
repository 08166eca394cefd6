//! Column width resolution.
//!
//! Each column first gets its own contribution (its strategy's preferred
//! width in the committed pass, or its maximum intrinsic width when the
//! table answers an intrinsic height query). Whatever is left of the
//! container width is then shared among flexible columns by weight.
//!
//! The resolver does not clamp. When the contributions already exceed the
//! container width, flexible columns get nothing extra and the excess is
//! left for the caller to report.

use super::column_width::ColumnWidth;
use super::flex::distribute_leftover;

/// Final widths of all columns plus the bookkeeping used to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumns {
    pub widths: Vec<f32>,
    /// Sum of all flex weights.
    pub total_flex: f32,
    /// Container width minus the sum of contributions, before distribution.
    /// Negative when the contributions overflow the container.
    pub leftover: f32,
}

impl ResolvedColumns {
    pub fn total_width(&self) -> f32 {
        self.widths.iter().sum()
    }
}

/// Sizes columns from their strategies.
///
/// Strategies are taken once per pass, so each column's strategy is
/// evaluated exactly once.
pub struct ColumnResolver<'s> {
    strategies: &'s [ColumnWidth],
}

impl<'s> ColumnResolver<'s> {
    pub fn new(strategies: &'s [ColumnWidth]) -> Self {
        Self { strategies }
    }

    pub fn columns(&self) -> usize {
        self.strategies.len()
    }

    /// Resolve widths against `container_width`.
    ///
    /// `contribution` is called once per column, in column order, and returns
    /// the width the column takes before it is stretched.
    pub fn resolve(
        &self,
        container_width: f32,
        mut contribution: impl FnMut(usize, &ColumnWidth) -> f32,
    ) -> ResolvedColumns {
        let mut widths = Vec::with_capacity(self.strategies.len());
        let mut flex = Vec::with_capacity(self.strategies.len());
        let mut leftover = container_width;

        for (column, strategy) in self.strategies.iter().enumerate() {
            let width = contribution(column, strategy);
            leftover -= width;
            widths.push(width);
            flex.push(strategy.flex_value());
        }

        let total_flex: f32 = flex.iter().sum();
        let added = distribute_leftover(&mut widths, &flex, leftover);

        tracing::debug!(
            "resolved {} columns: container={} leftover={} flex={} added={}",
            widths.len(),
            container_width,
            leftover,
            total_flex,
            added
        );

        ResolvedColumns {
            widths,
            total_flex,
            leftover,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
