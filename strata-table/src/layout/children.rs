//! Table children and their row association.
//!
//! Every cell carries the index of the row it belongs to. The row-group
//! builder attaches it; the layout pass groups by it once per pass instead of
//! inspecting children for metadata.

use indexmap::IndexMap;

use crate::error::{Result, TableError};

/// A child of the table together with its row association.
///
/// Children with `row: None` are not cells and are ignored by layout.
#[derive(Debug, Clone)]
pub struct TableChild<M> {
    pub row: Option<usize>,
    pub measurable: M,
}

impl<M> TableChild<M> {
    pub fn new(row: usize, measurable: M) -> Self {
        Self {
            row: Some(row),
            measurable,
        }
    }

    pub fn detached(measurable: M) -> Self {
        Self {
            row: None,
            measurable,
        }
    }
}

/// Collects table children row by row.
///
/// ```ignore
/// let mut children = TableChildren::new(3);
/// children.row(|column| Cell::text(format!("r0c{column}")));
/// children.row(|column| Cell::text(format!("r1c{column}")));
/// table.measure(children.as_slice(), constraints)?;
/// ```
#[derive(Debug, Clone)]
pub struct TableChildren<M> {
    columns: usize,
    children: Vec<TableChild<M>>,
    rows: usize,
}

impl<M> TableChildren<M> {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            children: Vec::new(),
            rows: 0,
        }
    }

    /// Add a row. `cell` is called once per column, in column order.
    pub fn row(&mut self, mut cell: impl FnMut(usize) -> M) -> &mut Self {
        let row = self.rows;
        self.rows += 1;
        self.children.reserve(self.columns);
        for column in 0..self.columns {
            self.children.push(TableChild::new(row, cell(column)));
        }
        self
    }

    /// Add a child that takes no part in the grid.
    pub fn detached(&mut self, measurable: M) -> &mut Self {
        self.children.push(TableChild::detached(measurable));
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn as_slice(&self) -> &[TableChild<M>] {
        &self.children
    }

    pub fn into_vec(self) -> Vec<TableChild<M>> {
        self.children
    }
}

/// Children grouped into rows of exactly `columns` cells.
///
/// Rows appear in order of first appearance of their index; within a row,
/// cells keep the order they were supplied in.
#[derive(Debug)]
pub(crate) struct RowGroups<'a, M> {
    rows: Vec<Vec<&'a M>>,
}

impl<'a, M> RowGroups<'a, M> {
    pub(crate) fn partition(children: &'a [TableChild<M>], columns: usize) -> Result<Self> {
        let mut groups: IndexMap<usize, Vec<&'a M>> = IndexMap::new();
        let mut detached = 0usize;

        for child in children {
            match child.row {
                Some(row) => groups
                    .entry(row)
                    .or_insert_with(|| Vec::with_capacity(columns))
                    .push(&child.measurable),
                None => detached += 1,
            }
        }

        if detached > 0 {
            tracing::trace!("skipping {} children without a row", detached);
        }

        for (&row, cells) in &groups {
            if cells.len() != columns {
                return Err(TableError::RowLength {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
        }

        Ok(Self {
            rows: groups.into_values().collect(),
        })
    }

    #[inline]
    pub(crate) fn rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, column: usize) -> &'a M {
        self.rows[row][column]
    }
}
