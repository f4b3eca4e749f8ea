//! Ordered storage of disjoint, non-adjacent index ranges.

use indexset_common::{Result, verify_data};

use crate::range::{Index, IndexRange};

/// Finds the position of `index` within a canonical list of ranges.
///
/// Returns the position `p` of the range containing `index`, or, if no range
/// contains it, the position at which a singleton range for `index` would be
/// inserted to keep the list sorted (`ranges.len()` when `index` lies past
/// the last range). An index equal to the exclusive end of a range resolves
/// to the following position.
///
/// `ranges` must be sorted and disjoint. Complexity: O(log n).
#[inline]
pub fn find_position(ranges: &[IndexRange], index: Index) -> usize {
    // First range that ends after `index`: it either contains `index` or
    // starts after it.
    ranges.partition_point(|r| r.max() <= index)
}

/// The exclusively owned range list of an index set.
///
/// Invariants (checked by [`check_invariants`](Self::check_invariants)):
/// - ranges are sorted ascending by `location`;
/// - consecutive ranges neither overlap nor touch
///   (`prev.max() < next.location`);
/// - no range is empty;
/// - no range reaches past [`NOT_FOUND`](crate::NOT_FOUND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct RangeStore {
    ranges: Vec<IndexRange>,
}

impl RangeStore {
    pub fn new() -> RangeStore {
        RangeStore { ranges: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> RangeStore {
        RangeStore {
            ranges: Vec::with_capacity(capacity),
        }
    }

    /// Builds a store from ranges that are expected to be already canonical.
    ///
    /// Fails with `InvalidFormat` if any of the store invariants does not hold.
    pub fn from_sorted_ranges(ranges: Vec<IndexRange>) -> Result<RangeStore> {
        verify_data!(ranges, ranges.iter().all(|r| !r.is_empty()));
        verify_data!(ranges, ranges.iter().all(|r| r.checked_max().is_some()));
        verify_data!(ranges, ranges.windows(2).all(|w| w[0].max() < w[1].location));
        Ok(RangeStore { ranges })
    }

    #[inline]
    pub fn ranges(&self) -> &[IndexRange] {
        &self.ranges
    }

    #[inline]
    pub(crate) fn ranges_mut(&mut self) -> &mut Vec<IndexRange> {
        &mut self.ranges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// See [`find_position`].
    #[inline]
    pub fn find_position(&self, index: Index) -> usize {
        find_position(&self.ranges, index)
    }

    /// Removes all ranges, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Returns the number of heap-allocated bytes used by the range buffer.
    pub fn heap_size_bytes(&self) -> usize {
        self.ranges.capacity() * std::mem::size_of::<IndexRange>()
    }

    /// Runs the consistency checks after a mutation in debug builds, or when
    /// the `verify-invariants` feature is enabled.
    #[inline]
    pub(crate) fn debug_check_invariants(&self) {
        #[cfg(any(debug_assertions, feature = "verify-invariants"))]
        self.check_invariants();
    }

    /// Panics if any store invariant does not hold.
    pub fn check_invariants(&self) {
        let mut prev: Option<&IndexRange> = None;
        for r in &self.ranges {
            assert!(!r.is_empty(), "Empty range stored at {}", r.location);
            assert!(
                r.checked_max().is_some(),
                "Range {:?} reaches past the largest storable index",
                r
            );
            if let Some(p) = prev {
                assert!(
                    p.max() < r.location,
                    "Ranges must be sorted, disjoint and non-adjacent: prev={:?}, next={:?}",
                    p,
                    r
                );
            }
            prev = Some(r);
        }
    }
}

impl std::fmt::Display for RangeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, r) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str("]")
    }
}
