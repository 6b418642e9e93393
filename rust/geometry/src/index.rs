// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial lookup from a plan point to the segment containing it
//!
//! Backed by a coarse uniform grid over the z=0 plane. Lookup order is
//! the insertion order: when two overlapping segments both contain a
//! query point, the first one inserted wins. Callers rely on that
//! tie-break, so the grid only narrows the candidate set and never
//! reorders it.

use crate::segment::{Segment, CONTAINMENT_TOL};
use nalgebra::Point2;
use rustc_hash::FxHashMap;

/// Grid cell edge length in internal units. Sized for building plans
/// measured in feet; correctness does not depend on it.
const DEFAULT_CELL_SIZE: f64 = 32.0;

/// Spatial index over 2D-projected segments, keyed by a caller-supplied id.
#[derive(Debug, Clone)]
pub struct SegmentIndex<K> {
    cell_size: f64,
    cells: FxHashMap<(i64, i64), Vec<usize>>,
    entries: Vec<(K, Segment)>,
}

impl<K: Copy> SegmentIndex<K> {
    pub fn new() -> Self {
        Self::with_cell_size(DEFAULT_CELL_SIZE)
    }

    pub fn with_cell_size(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a segment under `key`. Insertion order defines query
    /// priority.
    pub fn insert(&mut self, key: K, segment: Segment) {
        let entry = self.entries.len();
        self.entries.push((key, segment));

        // The containment slack allows a perpendicular deviation of up to
        // roughly sqrt(tol * len / 2); pad the covered cells accordingly
        // so a tolerant hit can never land in an unlisted cell.
        let pad = (CONTAINMENT_TOL * segment.length_2d())
            .sqrt()
            .max(CONTAINMENT_TOL);
        let (min_x, min_y, max_x, max_y) = segment.bounds_2d();

        let c0 = self.cell_of(min_x - pad, min_y - pad);
        let c1 = self.cell_of(max_x + pad, max_y + pad);
        for cx in c0.0..=c1.0 {
            for cy in c0.1..=c1.1 {
                self.cells.entry((cx, cy)).or_default().push(entry);
            }
        }
    }

    /// Find the first-inserted segment containing `point` in plan.
    pub fn query(&self, point: &Point2<f64>) -> Option<K> {
        let cell = self.cell_of(point.x, point.y);
        let candidates = self.cells.get(&cell)?;
        // Per-cell entry lists are appended in insertion order, so the
        // first containment hit is the globally first-inserted match.
        for &entry in candidates {
            let (key, segment) = &self.entries[entry];
            if segment.contains_2d(point) {
                return Some(*key);
            }
        }
        None
    }

    fn cell_of(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }
}

impl<K: Copy> Default for SegmentIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point3::new(x0, y0, 0.0), Point3::new(x1, y1, 0.0)).unwrap()
    }

    #[test]
    fn finds_the_containing_segment() {
        let mut index = SegmentIndex::new();
        index.insert(1u32, seg(0.0, 0.0, 10.0, 0.0));
        index.insert(2u32, seg(0.0, 5.0, 0.0, 15.0));

        assert_eq!(index.query(&Point2::new(5.0, 0.0)), Some(1));
        assert_eq!(index.query(&Point2::new(0.0, 10.0)), Some(2));
    }

    #[test]
    fn misses_return_none() {
        let mut index = SegmentIndex::new();
        index.insert(1u32, seg(0.0, 0.0, 10.0, 0.0));

        assert_eq!(index.query(&Point2::new(5.0, 3.0)), None);
        assert_eq!(index.query(&Point2::new(500.0, 500.0)), None);
    }

    #[test]
    fn empty_index_matches_nothing() {
        let index: SegmentIndex<u32> = SegmentIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.query(&Point2::new(0.0, 0.0)), None);
    }

    #[test]
    fn first_inserted_wins_on_overlap() {
        let mut index = SegmentIndex::new();
        index.insert(7u32, seg(0.0, 0.0, 10.0, 0.0));
        index.insert(8u32, seg(-5.0, 0.0, 15.0, 0.0));

        assert_eq!(index.query(&Point2::new(5.0, 0.0)), Some(7));
        // Only the second segment covers this stretch.
        assert_eq!(index.query(&Point2::new(-2.0, 0.0)), Some(8));
    }

    #[test]
    fn works_across_cell_boundaries() {
        let mut index = SegmentIndex::with_cell_size(4.0);
        index.insert(3u32, seg(-10.0, 1.0, 50.0, 1.0));

        assert_eq!(index.query(&Point2::new(-10.0, 1.0)), Some(3));
        assert_eq!(index.query(&Point2::new(3.99, 1.0)), Some(3));
        assert_eq!(index.query(&Point2::new(4.01, 1.0)), Some(3));
        assert_eq!(index.query(&Point2::new(49.9, 1.0)), Some(3));
    }

    #[test]
    fn tolerant_hits_near_cell_edges_are_found() {
        let mut index = SegmentIndex::with_cell_size(4.0);
        // Segment ends just shy of the x=8 cell edge; a query within
        // containment slack on the far side must still resolve.
        index.insert(9u32, seg(0.0, 0.0, 7.9999, 0.0));
        assert_eq!(index.query(&Point2::new(7.99995, 0.0)), Some(9));
    }
}
