//! Read-only queries shared by [`IndexSet`](crate::IndexSet) and
//! [`IndexSetBuilder`](crate::IndexSetBuilder).

use crate::{
    enumerate::{self, ClippedRanges, EnumerateFlags, Indices},
    range::{Index, IndexRange, NOT_FOUND},
    range_store::find_position,
};

/// Selects the relation used by [`IndexQuery::nearest_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexPredicate {
    /// The closest index strictly less than the given one.
    LessThan,
    /// The closest index less than or equal to the given one.
    LessThanOrEqual,
    /// The closest index greater than or equal to the given one.
    GreaterThanOrEqual,
    /// The closest index strictly greater than the given one.
    GreaterThan,
}

/// Queries over a canonical, sorted list of disjoint non-adjacent ranges.
///
/// Every operation resolves the relevant range through a binary search over
/// [`ranges`](Self::ranges). Results that find nothing are reported with the
/// [`NOT_FOUND`] sentinel; the `Option` returning conveniences
/// ([`first`](Self::first), [`last`](Self::last), [`nearest`](Self::nearest))
/// map it to `None`.
pub trait IndexQuery {
    /// The canonical ranges of the set, ascending.
    fn ranges(&self) -> &[IndexRange];

    /// Returns `true` if the set accepts mutation.
    fn is_mutable(&self) -> bool;

    /// Number of indices in the set. O(number of ranges).
    fn size(&self) -> u64 {
        self.ranges().iter().map(|r| r.length).sum()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.ranges().is_empty()
    }

    /// Number of stored ranges.
    #[inline]
    fn range_count(&self) -> usize {
        self.ranges().len()
    }

    /// The smallest index, or [`NOT_FOUND`] if the set is empty.
    fn first_index(&self) -> Index {
        self.ranges().first().map_or(NOT_FOUND, |r| r.location)
    }

    /// The largest index, or [`NOT_FOUND`] if the set is empty.
    fn last_index(&self) -> Index {
        self.ranges().last().map_or(NOT_FOUND, |r| r.max() - 1)
    }

    fn first(&self) -> Option<Index> {
        found(self.first_index())
    }

    fn last(&self) -> Option<Index> {
        found(self.last_index())
    }

    fn contains_index(&self, index: Index) -> bool {
        let ranges = self.ranges();
        ranges
            .get(find_position(ranges, index))
            .is_some_and(|r| r.contains(index))
    }

    /// Returns `true` if a single stored range holds every index of `range`.
    ///
    /// An empty `range` is always contained. A range whose upper bound does
    /// not fit below the sentinel is never contained.
    fn contains_range(&self, range: IndexRange) -> bool {
        if range.is_empty() {
            return true;
        }
        let Some(last) = range.last().filter(|&last| last != NOT_FOUND) else {
            return false;
        };
        let ranges = self.ranges();
        ranges
            .get(find_position(ranges, range.location))
            .is_some_and(|r| r.contains(range.location) && r.contains(last))
    }

    /// The index closest to `index` that satisfies `predicate`, or
    /// [`NOT_FOUND`] if there is none.
    fn nearest_index(&self, predicate: IndexPredicate, index: Index) -> Index {
        let ranges = self.ranges();
        if ranges.is_empty() {
            return NOT_FOUND;
        }
        match predicate {
            IndexPredicate::GreaterThan => match index.checked_add(1) {
                Some(next) if next != NOT_FOUND => at_or_after(ranges, next),
                _ => NOT_FOUND,
            },
            IndexPredicate::GreaterThanOrEqual if index == NOT_FOUND => NOT_FOUND,
            IndexPredicate::GreaterThanOrEqual => at_or_after(ranges, index),
            IndexPredicate::LessThan => match index.checked_sub(1) {
                Some(prev) => at_or_before(ranges, prev),
                None => NOT_FOUND,
            },
            IndexPredicate::LessThanOrEqual => at_or_before(ranges, index),
        }
    }

    fn nearest(&self, predicate: IndexPredicate, index: Index) -> Option<Index> {
        found(self.nearest_index(predicate, index))
    }

    /// Calls `f` for each index of the set, ascending, or descending with
    /// [`EnumerateFlags::REVERSE`]. `f` returns `true` to stop.
    ///
    /// Returns the number of indices visited, including the one that stopped
    /// the enumeration.
    fn enumerate(&self, flags: EnumerateFlags, f: impl FnMut(Index) -> bool) -> usize
    where
        Self: Sized,
    {
        let (first, last) = (self.first_index(), self.last_index());
        if first == NOT_FOUND {
            return 0;
        }
        self.enumerate_in_range(IndexRange::from_bounds(first, last + 1), flags, f)
    }

    /// Like [`enumerate`](Self::enumerate), restricted to the indices inside
    /// `range`.
    fn enumerate_in_range(
        &self,
        range: IndexRange,
        flags: EnumerateFlags,
        f: impl FnMut(Index) -> bool,
    ) -> usize
    where
        Self: Sized,
    {
        enumerate::enumerate_in_range(self.ranges(), range, flags, f)
    }

    /// Iterates the stored ranges clipped to `range`.
    fn ranges_within(&self, range: IndexRange) -> ClippedRanges<'_> {
        ClippedRanges::within(self.ranges(), range)
    }

    /// Iterates every index of the set.
    fn indices(&self) -> Indices<'_> {
        Indices::new(ClippedRanges::new(self.ranges()))
    }

    /// Iterates the indices of the set inside `range`.
    fn indices_within(&self, range: IndexRange) -> Indices<'_> {
        Indices::new(self.ranges_within(range))
    }
}

#[inline]
fn found(index: Index) -> Option<Index> {
    (index != NOT_FOUND).then_some(index)
}

/// `index` if contained, else the start of the next range.
fn at_or_after(ranges: &[IndexRange], index: Index) -> Index {
    match ranges.get(find_position(ranges, index)) {
        Some(r) if r.contains(index) => index,
        Some(r) => r.location,
        None => NOT_FOUND,
    }
}

/// `index` if contained, else the last index of the preceding range.
fn at_or_before(ranges: &[IndexRange], index: Index) -> Index {
    let pos = find_position(ranges, index);
    match ranges.get(pos) {
        Some(r) if r.contains(index) => index,
        _ if pos == 0 => NOT_FOUND,
        _ => ranges[pos - 1].max() - 1,
    }
}
