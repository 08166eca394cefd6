//! Layout constraints for constraint-based layout.
//!
//! The ancestor hands the table one set of bounds. The table hands each cell
//! its own: unbounded while a `Wrap` column is being sized, then capped at the
//! column width for the final measurement.

use serde::{Deserialize, Serialize};

use crate::primitives::Size;

/// Min/max bounds on both axes, similar to Flutter's BoxConstraints.
///
/// `max_width` and `max_height` may be `f32::INFINITY` (unbounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl LayoutConstraints {
    /// Anything from zero to infinity on both axes.
    pub const UNBOUNDED: Self = Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY);

    #[inline]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exactly `width` by `height`.
    #[inline]
    pub const fn tight(width: f32, height: f32) -> Self {
        Self::new(width, width, height, height)
    }

    /// Up to `max_width` by `max_height`, down to zero.
    #[inline]
    pub const fn loose(max_width: f32, max_height: f32) -> Self {
        Self::new(0.0, max_width, 0.0, max_height)
    }

    /// Constrained width, unbounded height.
    ///
    /// This is what a cell sees in the second pass once its column width is known.
    #[inline]
    pub const fn with_max_width(max_width: f32) -> Self {
        Self::new(0.0, max_width, 0.0, f32::INFINITY)
    }

    /// Clamp a size into these bounds.
    ///
    /// Each axis is clamped on its own, so an oversized table is cut back
    /// to `max_*` and an undersized one is grown to `min_*`.
    #[inline(always)]
    pub fn constrain(&self, size: Size) -> Size {
        debug_assert!(!size.width.is_nan(), "NaN table width");
        debug_assert!(!size.height.is_nan(), "NaN table height");
        Size::new(
            clamp_axis(size.width, self.min_width, self.max_width),
            clamp_axis(size.height, self.min_height, self.max_height),
        )
    }

    /// The width the table divides among its columns.
    ///
    /// An infinite upper bound cannot be split among fractional or flexible
    /// columns, so the lower bound is used instead.
    #[inline]
    pub fn container_width(&self) -> f32 {
        if self.max_width.is_finite() {
            self.max_width
        } else {
            self.min_width
        }
    }
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

// `f32::clamp` panics when min > max; inconsistent constraints favour the minimum.
#[inline(always)]
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
