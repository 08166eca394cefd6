//! Column width strategies.
//!
//! A column is either inflexible (its width is whatever its strategy says) or
//! flexible (it also takes a share of the space left over once every column
//! has its preferred width). Strategies are plain values; evaluation reaches
//! the cells only through [`ColumnCells`], so the only side effect a strategy
//! can have is causing a cell to be measured.
//!
//! ```text
//! ColumnWidth
//! ├── Flex(weight)              preferred 0, grows by weight
//! ├── Flexible { flex, of }     preferred from `of`, grows by flex
//! └── Inflexible
//!     ├── Wrap                  widest unbounded measurement   (measures)
//!     ├── MinIntrinsic          widest min intrinsic width     (expensive)
//!     ├── MaxIntrinsic          widest max intrinsic width     (expensive)
//!     ├── Fixed(dp)
//!     ├── Fraction(f)           f × container width, 0 when unbounded
//!     └── Min(a, b) / Max(a, b)
//! ```

use serde::{Deserialize, Serialize};

use super::length::{Density, Dp};
use super::probe::ColumnCells;

/// How one column's width is determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnWidth {
    /// Takes a share of the remaining space proportional to the weight.
    /// Contributes nothing until stretched, so it defaults to 0 when no space is left.
    Flex(f32),

    /// Starts at the preferred width of `of`, then grows like [`ColumnWidth::Flex`].
    Flexible { flex: f32, of: Inflexible },

    #[serde(untagged)]
    Inflexible(Inflexible),
}

/// A strategy whose width does not depend on leftover space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inflexible {
    /// Width of the widest cell, measured with unbounded width.
    ///
    /// Cells may report a very large width under unbounded constraints. Use
    /// [`Inflexible::MinIntrinsic`] or [`Inflexible::MaxIntrinsic`] to avoid that.
    Wrap,

    /// Largest minimum intrinsic width among the cells. Expensive.
    MinIntrinsic,

    /// Largest maximum intrinsic width among the cells. Expensive.
    MaxIntrinsic,

    /// A fixed length.
    Fixed(Dp),

    /// A fraction in `[0, 1]` of the container width, or 0 when the container
    /// width is unbounded.
    Fraction(f32),

    /// The smaller of two strategies. Both are evaluated.
    Min(Box<Inflexible>, Box<Inflexible>),

    /// The larger of two strategies. Both are evaluated.
    Max(Box<Inflexible>, Box<Inflexible>),
}

impl ColumnWidth {
    pub fn flex(weight: f32) -> Self {
        ColumnWidth::Flex(weight)
    }

    pub fn wrap() -> Self {
        Inflexible::Wrap.into()
    }

    pub fn min_intrinsic() -> Self {
        Inflexible::MinIntrinsic.into()
    }

    pub fn max_intrinsic() -> Self {
        Inflexible::MaxIntrinsic.into()
    }

    pub fn fixed(width: impl Into<Dp>) -> Self {
        Inflexible::Fixed(width.into()).into()
    }

    pub fn fraction(fraction: f32) -> Self {
        Inflexible::Fraction(fraction).into()
    }

    /// Weight in leftover-space distribution; 0 for inflexible columns.
    ///
    /// Negative and NaN weights count as 0.
    pub fn flex_value(&self) -> f32 {
        match self {
            ColumnWidth::Flex(weight) | ColumnWidth::Flexible { flex: weight, .. } => {
                sanitize_flex(*weight)
            }
            ColumnWidth::Inflexible(_) => 0.0,
        }
    }

    pub fn is_flexible(&self) -> bool {
        self.flex_value() > 0.0
    }

    /// Width of the column before any leftover space is distributed.
    pub fn preferred_width(
        &self,
        cells: &mut dyn ColumnCells,
        container_width: f32,
        density: Density,
    ) -> f32 {
        match self {
            ColumnWidth::Flex(_) => 0.0,
            ColumnWidth::Flexible { of, .. } | ColumnWidth::Inflexible(of) => {
                of.preferred_width(cells, container_width, density)
            }
        }
    }

    /// Minimum intrinsic width of the column for the given table height.
    pub fn min_intrinsic_width(
        &self,
        cells: &mut dyn ColumnCells,
        container_width: f32,
        density: Density,
        available_height: f32,
    ) -> f32 {
        match self {
            ColumnWidth::Flex(_) => 0.0,
            ColumnWidth::Flexible { of, .. } | ColumnWidth::Inflexible(of) => {
                of.min_intrinsic_width(cells, container_width, density, available_height)
            }
        }
    }

    /// Maximum intrinsic width of the column for the given table height.
    pub fn max_intrinsic_width(
        &self,
        cells: &mut dyn ColumnCells,
        container_width: f32,
        density: Density,
        available_height: f32,
    ) -> f32 {
        match self {
            ColumnWidth::Flex(_) => 0.0,
            ColumnWidth::Flexible { of, .. } | ColumnWidth::Inflexible(of) => {
                of.max_intrinsic_width(cells, container_width, density, available_height)
            }
        }
    }
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1.0)
    }
}

impl From<Inflexible> for ColumnWidth {
    fn from(inflexible: Inflexible) -> Self {
        ColumnWidth::Inflexible(inflexible)
    }
}

impl Inflexible {
    pub fn fixed(width: impl Into<Dp>) -> Self {
        Inflexible::Fixed(width.into())
    }

    pub fn min(a: Inflexible, b: Inflexible) -> Self {
        Inflexible::Min(Box::new(a), Box::new(b))
    }

    pub fn max(a: Inflexible, b: Inflexible) -> Self {
        Inflexible::Max(Box::new(a), Box::new(b))
    }

    /// Keep this strategy's preferred width, but also grow by `flex` once all
    /// inflexible columns have been sized.
    pub fn flexible(self, flex: f32) -> ColumnWidth {
        ColumnWidth::Flexible { flex, of: self }
    }

    pub fn preferred_width(
        &self,
        cells: &mut dyn ColumnCells,
        container_width: f32,
        density: Density,
    ) -> f32 {
        match self {
            Inflexible::Wrap => widest(cells, |cells, row| cells.preferred_width(row)),
            Inflexible::MinIntrinsic => {
                widest(cells, |cells, row| cells.min_intrinsic_width(row, f32::INFINITY))
            }
            Inflexible::MaxIntrinsic => {
                widest(cells, |cells, row| cells.max_intrinsic_width(row, f32::INFINITY))
            }
            Inflexible::Fixed(width) => width.to_px(density),
            Inflexible::Fraction(fraction) => {
                if container_width.is_finite() {
                    container_width * sanitize_fraction(*fraction)
                } else {
                    0.0
                }
            }
            Inflexible::Min(a, b) => a
                .preferred_width(cells, container_width, density)
                .min(b.preferred_width(cells, container_width, density)),
            Inflexible::Max(a, b) => a
                .preferred_width(cells, container_width, density)
                .max(b.preferred_width(cells, container_width, density)),
        }
    }

    pub fn min_intrinsic_width(
        &self,
        cells: &mut dyn ColumnCells,
        container_width: f32,
        density: Density,
        available_height: f32,
    ) -> f32 {
        match self {
            Inflexible::Wrap | Inflexible::MinIntrinsic | Inflexible::MaxIntrinsic => {
                let height = row_share(available_height, cells.len());
                widest(cells, |cells, row| cells.min_intrinsic_width(row, height))
            }
            Inflexible::Fixed(_) | Inflexible::Fraction(_) => {
                self.preferred_width(cells, container_width, density)
            }
            Inflexible::Min(a, b) => a
                .min_intrinsic_width(cells, container_width, density, available_height)
                .min(b.min_intrinsic_width(cells, container_width, density, available_height)),
            Inflexible::Max(a, b) => a
                .min_intrinsic_width(cells, container_width, density, available_height)
                .max(b.min_intrinsic_width(cells, container_width, density, available_height)),
        }
    }

    pub fn max_intrinsic_width(
        &self,
        cells: &mut dyn ColumnCells,
        container_width: f32,
        density: Density,
        available_height: f32,
    ) -> f32 {
        match self {
            Inflexible::Wrap | Inflexible::MinIntrinsic | Inflexible::MaxIntrinsic => {
                let height = row_share(available_height, cells.len());
                widest(cells, |cells, row| cells.max_intrinsic_width(row, height))
            }
            Inflexible::Fixed(_) | Inflexible::Fraction(_) => {
                self.preferred_width(cells, container_width, density)
            }
            Inflexible::Min(a, b) => a
                .max_intrinsic_width(cells, container_width, density, available_height)
                .min(b.max_intrinsic_width(cells, container_width, density, available_height)),
            Inflexible::Max(a, b) => a
                .max_intrinsic_width(cells, container_width, density, available_height)
                .max(b.max_intrinsic_width(cells, container_width, density, available_height)),
        }
    }
}

/// Largest per-row answer in a column, 0 for an empty column.
fn widest(
    cells: &mut dyn ColumnCells,
    mut width_of: impl FnMut(&mut dyn ColumnCells, usize) -> f32,
) -> f32 {
    let mut widest = 0.0f32;
    for row in 0..cells.len() {
        widest = widest.max(width_of(cells, row));
    }
    widest
}

// The table height is split evenly across rows. This ignores row height
// variation and is an approximation, not a bound.
#[inline]
fn row_share(available_height: f32, rows: usize) -> f32 {
    if rows == 0 {
        available_height
    } else {
        available_height / rows as f32
    }
}

#[inline]
fn sanitize_flex(weight: f32) -> f32 {
    if weight > 0.0 { weight } else { 0.0 }
}

#[inline]
fn sanitize_fraction(fraction: f32) -> f32 {
    if fraction > 0.0 { fraction.min(1.0) } else { 0.0 }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Column probes backed by fixed per-row answers.
    #[derive(Default)]
    struct StubCells {
        preferred: Vec<f32>,
        min: Vec<f32>,
        max: Vec<f32>,
        preferred_calls: usize,
        heights_seen: Vec<f32>,
    }

    impl StubCells {
        fn new(preferred: &[f32], min: &[f32], max: &[f32]) -> Self {
            Self {
                preferred: preferred.to_vec(),
                min: min.to_vec(),
                max: max.to_vec(),
                ..Default::default()
            }
        }
    }

    impl ColumnCells for StubCells {
        fn len(&self) -> usize {
            self.preferred.len()
        }
        fn preferred_width(&mut self, row: usize) -> f32 {
            self.preferred_calls += 1;
            self.preferred[row]
        }
        fn min_intrinsic_width(&mut self, row: usize, height: f32) -> f32 {
            self.heights_seen.push(height);
            self.min[row]
        }
        fn max_intrinsic_width(&mut self, row: usize, height: f32) -> f32 {
            self.heights_seen.push(height);
            self.max[row]
        }
    }

    fn cells() -> StubCells {
        StubCells::new(&[30.0, 70.0], &[10.0, 20.0], &[60.0, 90.0])
    }

    const D: Density = Density::new(1.0);

    #[test]
    fn test_flex_values() {
        assert_eq!(ColumnWidth::flex(2.0).flex_value(), 2.0);
        assert_eq!(ColumnWidth::wrap().flex_value(), 0.0);
        assert_eq!(Inflexible::Wrap.flexible(3.0).flex_value(), 3.0);
        assert_eq!(ColumnWidth::flex(-1.0).flex_value(), 0.0);
        assert_eq!(ColumnWidth::flex(f32::NAN).flex_value(), 0.0);
        assert!(!ColumnWidth::fixed(10.0).is_flexible());
    }

    #[test]
    fn test_flex_prefers_zero() {
        let mut c = cells();
        assert_eq!(ColumnWidth::flex(1.0).preferred_width(&mut c, 500.0, D), 0.0);
        assert_eq!(c.preferred_calls, 0);
    }

    #[test]
    fn test_wrap_takes_widest_preferred() {
        let mut c = cells();
        assert_eq!(ColumnWidth::wrap().preferred_width(&mut c, 500.0, D), 70.0);
        assert_eq!(c.preferred_calls, 2);
    }

    #[test]
    fn test_intrinsic_strategies_use_unbounded_height() {
        let mut c = cells();
        assert_eq!(ColumnWidth::min_intrinsic().preferred_width(&mut c, 500.0, D), 20.0);
        assert_eq!(ColumnWidth::max_intrinsic().preferred_width(&mut c, 500.0, D), 90.0);
        assert!(c.heights_seen.iter().all(|h| h.is_infinite()));
        assert_eq!(c.preferred_calls, 0);
    }

    #[test]
    fn test_fixed_uses_density() {
        let mut c = cells();
        let fixed = ColumnWidth::fixed(40.0);
        assert_eq!(fixed.preferred_width(&mut c, 500.0, D), 40.0);
        assert_eq!(fixed.preferred_width(&mut c, f32::INFINITY, Density::new(2.0)), 80.0);
        assert_eq!(c.preferred_calls, 0);
    }

    #[test]
    fn test_fraction() {
        let mut c = cells();
        assert_eq!(ColumnWidth::fraction(0.25).preferred_width(&mut c, 400.0, D), 100.0);
        assert_eq!(ColumnWidth::fraction(0.5).preferred_width(&mut c, f32::INFINITY, D), 0.0);
        assert_eq!(ColumnWidth::fraction(1.5).preferred_width(&mut c, 400.0, D), 400.0);
        assert_eq!(ColumnWidth::fraction(-0.5).preferred_width(&mut c, 400.0, D), 0.0);
    }

    #[test]
    fn test_min_max_combinators() {
        let mut c = cells();
        let min: ColumnWidth = Inflexible::min(Inflexible::fixed(50.0), Inflexible::fixed(80.0)).into();
        let max: ColumnWidth = Inflexible::max(Inflexible::fixed(50.0), Inflexible::Wrap).into();

        assert_eq!(min.preferred_width(&mut c, 500.0, D), 50.0);
        assert_eq!(min.min_intrinsic_width(&mut c, 500.0, D, 100.0), 50.0);
        assert_eq!(min.max_intrinsic_width(&mut c, 500.0, D, 100.0), 50.0);
        assert_eq!(max.preferred_width(&mut c, 500.0, D), 70.0);
        assert_eq!(max.max_intrinsic_width(&mut c, 500.0, D, 100.0), 90.0);
    }

    #[test]
    fn test_intrinsic_splits_height_across_rows() {
        let mut c = cells();
        let width = ColumnWidth::wrap().min_intrinsic_width(&mut c, f32::INFINITY, D, 100.0);
        assert_eq!(width, 20.0);
        assert_eq!(c.heights_seen, vec![50.0, 50.0]);
        // Intrinsic queries never ask for preferred widths.
        assert_eq!(c.preferred_calls, 0);
    }

    #[test]
    fn test_flexible_delegates() {
        let mut c = cells();
        let flexible = Inflexible::MaxIntrinsic.flexible(2.0);
        assert_eq!(flexible.preferred_width(&mut c, 500.0, D), 90.0);
        assert_eq!(flexible.min_intrinsic_width(&mut c, 500.0, D, 10.0), 20.0);
        assert_eq!(flexible.max_intrinsic_width(&mut c, 500.0, D, 10.0), 90.0);
    }

    #[test]
    fn test_empty_column() {
        let mut c = StubCells::default();
        assert_eq!(ColumnWidth::wrap().preferred_width(&mut c, 100.0, D), 0.0);
        assert_eq!(ColumnWidth::wrap().max_intrinsic_width(&mut c, 100.0, D, 50.0), 0.0);
    }

    #[test]
    fn test_serde_shapes() {
        let json = serde_json::to_string(&ColumnWidth::wrap()).unwrap();
        assert_eq!(json, "\"wrap\"");

        let parsed: ColumnWidth = serde_json::from_str(r#"{"flex": 2.0}"#).unwrap();
        assert_eq!(parsed, ColumnWidth::flex(2.0));

        let parsed: ColumnWidth = serde_json::from_str(r#"{"fixed": 100.0}"#).unwrap();
        assert_eq!(parsed, ColumnWidth::fixed(100.0));

        let parsed: ColumnWidth =
            serde_json::from_str(r#"{"min": ["wrap", {"fixed": 50.0}]}"#).unwrap();
        assert_eq!(parsed, Inflexible::min(Inflexible::Wrap, Inflexible::fixed(50.0)).into());

        let parsed: ColumnWidth =
            serde_json::from_str(r#"{"flexible": {"flex": 1.0, "of": "max_intrinsic"}}"#).unwrap();
        assert_eq!(parsed, Inflexible::MaxIntrinsic.flexible(1.0));
    }
}
