//! Layout sizing types and constants.
//!
//! Absolute lengths, the density context that converts them to layout units,
//! and the alignment used to position a cell inside its slot.

use serde::{Deserialize, Serialize};

use crate::primitives::{Point, Size};

// Layout metrics for JetBrains Mono at 14px base size, used by the demo text cells.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;
pub const BASE_FONT_SIZE: f32 = 14.0;

/// A density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Self = Self(0.0);

    /// Convert to layout units under the given density.
    #[inline]
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.density
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

/// Scaling context for absolute lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Density {
    /// Layout units per [`Dp`].
    pub density: f32,
    /// Extra scale applied to text metrics, on top of `density`.
    pub font_scale: f32,
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self {
            density,
            font_scale: 1.0,
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Position of a child within the slot it was given.
///
/// Each axis is a bias in `[-1, 1]`: `-1` packs at the start, `0` centers,
/// `1` packs at the end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Alignment {
    pub const TOP_LEFT: Self = Self::new(-1.0, -1.0);
    pub const TOP_CENTER: Self = Self::new(0.0, -1.0);
    pub const TOP_RIGHT: Self = Self::new(1.0, -1.0);
    pub const CENTER_LEFT: Self = Self::new(-1.0, 0.0);
    pub const CENTER: Self = Self::new(0.0, 0.0);
    pub const CENTER_RIGHT: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_LEFT: Self = Self::new(-1.0, 1.0);
    pub const BOTTOM_CENTER: Self = Self::new(0.0, 1.0);
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    /// Offset of a child inside its slot, given the slack (slot size minus child size).
    #[inline]
    pub fn align(&self, slack: Size) -> Point {
        Point {
            x: slack.width * (1.0 + self.horizontal) / 2.0,
            y: slack.height * (1.0 + self.vertical) / 2.0,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px() {
        assert_eq!(Dp(100.0).to_px(Density::default()), 100.0);
        assert_eq!(Dp(100.0).to_px(Density::new(2.5)), 250.0);
    }

    #[test]
    fn test_alignment_offsets() {
        let slack = Size::new(40.0, 10.0);
        assert_eq!(Alignment::TOP_LEFT.align(slack), Point::ORIGIN);
        assert_eq!(Alignment::CENTER.align(slack), Point::new(20.0, 5.0));
        assert_eq!(Alignment::BOTTOM_RIGHT.align(slack), Point::new(40.0, 10.0));
        assert_eq!(Alignment::CENTER_RIGHT.align(slack), Point::new(40.0, 5.0));
    }

    #[test]
    fn test_alignment_zero_slack() {
        assert_eq!(Alignment::BOTTOM_CENTER.align(Size::ZERO), Point::ORIGIN);
    }
}
