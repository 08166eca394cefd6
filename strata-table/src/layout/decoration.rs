//! Published row/column offsets and the decorations that consume them.
//!
//! Grid lines, row stripes and backgrounds are drawn by decorations that only
//! need to know where rows and columns start. After every pass the table
//! compares the new offsets with the last published ones and notifies
//! decorations only when they differ.

use serde::{Deserialize, Serialize};

/// Row and column boundaries of a laid-out table.
///
/// `rows` has one more entry than there are rows, and `columns` one more than
/// there are columns: both start at 0 and end at the total extent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableOffsets {
    pub rows: Vec<f32>,
    pub columns: Vec<f32>,
}

impl TableOffsets {
    /// Build offsets as prefix sums of row heights and column widths.
    pub fn from_extents(row_heights: &[f32], column_widths: &[f32]) -> Self {
        Self {
            rows: prefix_sums(row_heights),
            columns: prefix_sums(column_widths),
        }
    }

    /// Total height covered by the rows.
    pub fn height(&self) -> f32 {
        self.rows.last().copied().unwrap_or(0.0)
    }

    /// Total width covered by the columns.
    pub fn width(&self) -> f32 {
        self.columns.last().copied().unwrap_or(0.0)
    }
}

fn prefix_sums(extents: &[f32]) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(extents.len() + 1);
    let mut running = 0.0f32;
    offsets.push(running);
    for extent in extents {
        running += extent;
        offsets.push(running);
    }
    offsets
}

/// Something drawn relative to the table's row and column boundaries.
pub trait TableDecoration {
    /// Called after a pass whose offsets differ from the last published ones.
    fn offsets_changed(&mut self, offsets: &TableOffsets);
}

impl<F: FnMut(&TableOffsets)> TableDecoration for F {
    fn offsets_changed(&mut self, offsets: &TableOffsets) {
        self(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sums() {
        let offsets = TableOffsets::from_extents(&[20.0, 30.0], &[100.0, 200.0, 50.0]);
        assert_eq!(offsets.rows, vec![0.0, 20.0, 50.0]);
        assert_eq!(offsets.columns, vec![0.0, 100.0, 300.0, 350.0]);
        assert_eq!(offsets.height(), 50.0);
        assert_eq!(offsets.width(), 350.0);
    }

    #[test]
    fn test_empty_extents() {
        let offsets = TableOffsets::from_extents(&[], &[]);
        assert_eq!(offsets.rows, vec![0.0]);
        assert_eq!(offsets.columns, vec![0.0]);
        assert_eq!(offsets.width(), 0.0);
    }

    #[test]
    fn test_closure_decoration() {
        let mut seen = Vec::new();
        {
            let mut deco = |o: &TableOffsets| seen.push(o.width());
            deco.offsets_changed(&TableOffsets::from_extents(&[1.0], &[5.0]));
        }
        assert_eq!(seen, vec![5.0]);
    }
}
