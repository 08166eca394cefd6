//! Test children shared by the layout unit tests.

use std::cell::Cell;

use super::children::{TableChild, TableChildren};
use super::constraints::LayoutConstraints;
use super::measurable::{Measurable, Placeable};

/// Attach row indices to a row-major grid of cells.
pub(crate) fn grid(columns: usize, cells: Vec<Vec<TestCell>>) -> Vec<TableChild<TestCell>> {
    let mut children = TableChildren::new(columns);
    for row in cells {
        let mut row = row.into_iter();
        children.row(|_| row.next().expect("row has a cell per column"));
    }
    children.into_vec()
}

/// A box that wraps like text: `width` on one line, or more lines of
/// `height` each when squeezed, never narrower than `min_width`.
#[derive(Debug)]
pub(crate) struct TestCell {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub measures: Cell<usize>,
    pub last_constraints: Cell<Option<LayoutConstraints>>,
}

impl TestCell {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self::wrapping(width, height, width)
    }

    pub(crate) fn wrapping(width: f32, height: f32, min_width: f32) -> Self {
        Self {
            width,
            height,
            min_width,
            measures: Cell::new(0),
            last_constraints: Cell::new(None),
        }
    }

    pub(crate) fn measures(&self) -> usize {
        self.measures.get()
    }

    fn height_for_width(&self, width: f32) -> f32 {
        if width >= self.width || !width.is_finite() {
            self.height
        } else {
            let lines = (self.width / width.max(self.min_width)).ceil();
            self.height * lines
        }
    }
}

impl Measurable for TestCell {
    fn measure(&self, constraints: LayoutConstraints) -> Placeable {
        self.measures.set(self.measures.get() + 1);
        self.last_constraints.set(Some(constraints));
        let width = self.width.min(constraints.max_width).max(constraints.min_width);
        Placeable::new(width, self.height_for_width(width))
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.min_width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.width
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for_width(width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.height_for_width(width)
    }
}
