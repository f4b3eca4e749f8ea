//! Insertion with coalescing and removal with splitting on a [`RangeStore`].
//!
//! Both operations assume the range was already checked to be storable (its
//! upper bound fits below the sentinel) and keep every store invariant.

use crate::{range::IndexRange, range_store::RangeStore};

impl RangeStore {
    /// Inserts `range`, merging it with every stored range it overlaps or
    /// touches.
    pub fn insert_range(&mut self, range: IndexRange) {
        if range.is_empty() {
            return;
        }
        debug_assert!(range.checked_max().is_some());

        // Slot for the new range: after a range that already contains its
        // start, otherwise at the resolved position.
        let mut lo = self.find_position(range.location);
        let ranges = self.ranges_mut();
        if ranges.get(lo).is_some_and(|r| r.contains(range.location)) {
            lo += 1;
        }
        let mut hi = lo;
        let mut merged = range;

        // Backward: predecessors reaching `merged.location` are absorbed.
        while lo > 0 && ranges[lo - 1].max() >= merged.location {
            merged = merged.union(&ranges[lo - 1]);
            lo -= 1;
        }

        // Forward: successors starting at or before `merged.max()` are absorbed.
        while hi < ranges.len() && ranges[hi].location <= merged.max() {
            merged = merged.union(&ranges[hi]);
            hi += 1;
        }

        // `lo..hi` are the absorbed ranges; when nothing is absorbed this is a
        // plain insertion (or append) at `lo`.
        ranges.splice(lo..hi, std::iter::once(merged));

        self.debug_check_invariants();
    }

    /// Removes every index inside `target`.
    ///
    /// Ranges inside `target` are dropped, ranges straddling either edge are
    /// truncated, and a range holding `target` in its interior is split in two.
    pub fn remove_range(&mut self, target: IndexRange) {
        if target.is_empty() || self.is_empty() {
            return;
        }
        debug_assert!(target.checked_max().is_some());

        let end = target.max();

        // `lo` is the first range ending after `target.location`, `hi` the
        // first range starting at or after `end`.
        let lo = self.find_position(target.location);
        let ranges = self.ranges_mut();
        let hi = lo + ranges[lo..].partition_point(|r| r.location < end);
        if lo == hi {
            return;
        }

        let head = IndexRange::from_bounds(ranges[lo].location, target.location);
        let tail = IndexRange::from_bounds(end, ranges[hi - 1].max());
        let kept = [head, tail].into_iter().filter(|r| !r.is_empty());
        ranges.splice(lo..hi, kept);

        self.debug_check_invariants();
    }

    /// Inserts every range of `other`, which must be canonical.
    pub fn insert_ranges(&mut self, other: &[IndexRange]) {
        if self.is_empty() {
            self.ranges_mut().extend_from_slice(other);
            self.debug_check_invariants();
            return;
        }
        for &r in other {
            self.insert_range(r);
        }
    }

    /// Removes every range of `other`, which must be canonical.
    pub fn remove_ranges(&mut self, other: &[IndexRange]) {
        for &r in other {
            self.remove_range(r);
        }
    }
}
