//! The child-side interface of the table.
//!
//! A table never knows what its cells are. It only asks them to measure under
//! constraints, or to answer intrinsic size questions without committing.

use crate::primitives::{Point, Rect, Size};

use super::constraints::LayoutConstraints;

/// A child that can be measured by a layout.
///
/// `measure` commits: the host may do real work (shaping text, laying out a
/// subtree) and the table guarantees it asks at most once per cell per pass.
/// The intrinsic queries are speculative and may be asked any number of times.
pub trait Measurable {
    /// Measure under the given constraints.
    fn measure(&self, constraints: LayoutConstraints) -> Placeable;

    /// Minimum width at which the child can paint itself correctly, for a given height.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Width beyond which extra space is wasted, for a given height.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    /// Minimum height the child needs at a given width.
    fn min_intrinsic_height(&self, width: f32) -> f32;

    /// Height beyond which extra space is wasted, at a given width.
    fn max_intrinsic_height(&self, width: f32) -> f32;
}

impl<M: Measurable + ?Sized> Measurable for &M {
    fn measure(&self, constraints: LayoutConstraints) -> Placeable {
        (**self).measure(constraints)
    }
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        (**self).min_intrinsic_width(height)
    }
    fn max_intrinsic_width(&self, height: f32) -> f32 {
        (**self).max_intrinsic_width(height)
    }
    fn min_intrinsic_height(&self, width: f32) -> f32 {
        (**self).min_intrinsic_height(width)
    }
    fn max_intrinsic_height(&self, width: f32) -> f32 {
        (**self).max_intrinsic_height(width)
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn measure(&self, constraints: LayoutConstraints) -> Placeable {
        (**self).measure(constraints)
    }
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        (**self).min_intrinsic_width(height)
    }
    fn max_intrinsic_width(&self, height: f32) -> f32 {
        (**self).max_intrinsic_width(height)
    }
    fn min_intrinsic_height(&self, width: f32) -> f32 {
        (**self).min_intrinsic_height(width)
    }
    fn max_intrinsic_height(&self, width: f32) -> f32 {
        (**self).max_intrinsic_height(width)
    }
}

/// The result of measuring one child: a concrete size that can be positioned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placeable {
    pub size: Size,
}

impl Placeable {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Place at an absolute offset, yielding the child's bounds.
    #[inline]
    pub fn place(&self, x: f32, y: f32) -> Rect {
        Rect::from_origin_size(Point::new(x, y), self.size)
    }
}
