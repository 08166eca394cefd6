//! Per-pass measurement cache.
//!
//! Holds every `Placeable` produced during one layout pass, indexed by
//! `(row, column)`, so that a cell measured while resolving column widths is
//! not measured again when the cell is finalized. Intrinsic answers requested
//! through the committed probes are memoized alongside.
//!
//! A cache lives for exactly one pass and is dropped with it.

use std::collections::HashMap;

use super::measurable::Placeable;

/// Which intrinsic width a memoized value answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum IntrinsicKind {
    MinWidth,
    MaxWidth,
}

/// Memo key for an intrinsic answer of one cell at one extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct IntrinsicKey {
    row: usize,
    column: usize,
    kind: IntrinsicKind,
    extent: u32,
}

impl IntrinsicKey {
    #[inline]
    pub(crate) fn new(row: usize, column: usize, kind: IntrinsicKind, extent: f32) -> Self {
        Self {
            row,
            column,
            kind,
            extent: hash_f32(extent),
        }
    }
}

#[derive(Debug)]
pub struct MeasurementCache {
    columns: usize,
    placeables: Vec<Option<Placeable>>,
    intrinsics: HashMap<IntrinsicKey, f32>,

    /// Number of `measure` calls recorded this pass.
    measurements: usize,

    /// Intrinsic memo stats for debugging
    #[cfg(debug_assertions)]
    pub hits: u64,
    #[cfg(debug_assertions)]
    pub misses: u64,
}

impl MeasurementCache {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            placeables: vec![None; rows * columns],
            intrinsics: HashMap::new(),
            measurements: 0,
            #[cfg(debug_assertions)]
            hits: 0,
            #[cfg(debug_assertions)]
            misses: 0,
        }
    }

    /// Look up the placeable measured for a cell, if any.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<Placeable> {
        self.placeables[self.slot(row, column)]
    }

    /// Record a fresh measurement of a cell.
    ///
    /// Replaces any earlier placeable for the same cell.
    #[inline]
    pub fn insert(&mut self, row: usize, column: usize, placeable: Placeable) {
        let slot = self.slot(row, column);
        self.placeables[slot] = Some(placeable);
        self.measurements += 1;
    }

    /// Total `measure` calls recorded so far in this pass.
    #[inline]
    pub fn measurements(&self) -> usize {
        self.measurements
    }

    /// Number of cells with a placeable.
    pub fn len(&self) -> usize {
        self.placeables.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.placeables.iter().all(Option::is_none)
    }

    #[inline]
    pub(crate) fn intrinsic(&mut self, key: IntrinsicKey) -> Option<f32> {
        let value = self.intrinsics.get(&key).copied();
        #[cfg(debug_assertions)]
        {
            if value.is_some() {
                self.hits += 1;
            } else {
                self.misses += 1;
            }
        }
        value
    }

    #[inline]
    pub(crate) fn insert_intrinsic(&mut self, key: IntrinsicKey, value: f32) {
        self.intrinsics.insert(key, value);
    }

    /// Get memo stats (debug builds only).
    #[cfg(debug_assertions)]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    #[inline]
    fn slot(&self, row: usize, column: usize) -> usize {
        debug_assert!(column < self.columns, "column {} out of range", column);
        row * self.columns + column
    }
}

/// Hash a single f32 extent for the memo key.
#[inline]
fn hash_f32(f: f32) -> u32 {
    f.to_bits()
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_insert_get() {
        let mut cache = MeasurementCache::new(2, 3);
        let placeable = Placeable::new(40.0, 12.0);

        cache.insert(1, 2, placeable);

        assert_eq!(cache.get(1, 2), Some(placeable));
        assert_eq!(cache.get(0, 2), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.measurements(), 1);
    }

    #[test]
    fn test_cache_remeasure_counts() {
        let mut cache = MeasurementCache::new(1, 1);
        cache.insert(0, 0, Placeable::new(80.0, 10.0));
        cache.insert(0, 0, Placeable::new(50.0, 20.0));

        assert_eq!(cache.get(0, 0), Some(Placeable::new(50.0, 20.0)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.measurements(), 2);
    }

    #[test]
    fn test_intrinsic_memo_keys_on_extent() {
        let mut cache = MeasurementCache::new(1, 1);
        let at_inf = IntrinsicKey::new(0, 0, IntrinsicKind::MinWidth, f32::INFINITY);
        let at_10 = IntrinsicKey::new(0, 0, IntrinsicKind::MinWidth, 10.0);
        let max_inf = IntrinsicKey::new(0, 0, IntrinsicKind::MaxWidth, f32::INFINITY);

        cache.insert_intrinsic(at_inf, 25.0);

        assert_eq!(cache.intrinsic(at_inf), Some(25.0));
        assert_eq!(cache.intrinsic(at_10), None);
        assert_eq!(cache.intrinsic(max_inf), None);
    }

    #[test]
    fn test_empty_cache() {
        let cache = MeasurementCache::new(0, 3);
        assert!(cache.is_empty());
        assert_eq!(cache.measurements(), 0);
    }
}
