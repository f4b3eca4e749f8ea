//! Half-open index ranges described by a start location and a length.

use std::ops::Range;

use indexset_common::{Result, result::range_overflow};

/// A non-negative index into some external collection.
pub type Index = u64;

/// Sentinel returned by queries that find no matching index.
///
/// `NOT_FOUND` is never a storable index: every range kept by an index set
/// ends at or below it.
pub const NOT_FOUND: Index = Index::MAX;

/// A half-open interval of indices `[location, location + length)`.
///
/// Unlike `Range<u64>`, an `IndexRange` is described by its start and its
/// length, so a zero-length range still carries a location. All methods are
/// total: degenerate (empty) ranges and ranges whose exclusive end would not
/// fit into a `u64` produce well-defined results instead of panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    /// The first index of the range.
    pub location: Index,
    /// The number of indices in the range (may be 0).
    pub length: u64,
}

impl IndexRange {
    /// The empty range at location 0.
    pub const EMPTY: IndexRange = IndexRange::new(0, 0);

    #[inline]
    pub const fn new(location: Index, length: u64) -> IndexRange {
        IndexRange { location, length }
    }

    /// A range holding exactly `index`.
    #[inline]
    pub const fn point(index: Index) -> IndexRange {
        IndexRange::new(index, 1)
    }

    /// Builds the range `[start, end)`; empty (at `start`) when `end <= start`.
    #[inline]
    pub const fn from_bounds(start: Index, end: Index) -> IndexRange {
        if end > start {
            IndexRange::new(start, end - start)
        } else {
            IndexRange::new(start, 0)
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Lower (inclusive) bound.
    #[inline]
    pub const fn min(&self) -> Index {
        self.location
    }

    /// Upper (exclusive) bound, saturating at `u64::MAX`.
    #[inline]
    pub const fn max(&self) -> Index {
        self.location.saturating_add(self.length)
    }

    /// Upper (exclusive) bound, or `None` if it does not fit into a `u64`.
    ///
    /// Ranges accepted by an index set always have a `Some` upper bound, which
    /// is at most [`NOT_FOUND`].
    #[inline]
    pub const fn checked_max(&self) -> Option<Index> {
        self.location.checked_add(self.length)
    }

    /// The last index in the range, or `None` if the range is empty.
    #[inline]
    pub fn last(&self) -> Option<Index> {
        self.length
            .checked_sub(1)
            .and_then(|offset| self.location.checked_add(offset))
    }

    #[inline]
    pub const fn center(&self) -> Index {
        self.location.saturating_add(self.length / 2)
    }

    /// Returns `true` if `location <= index < location + length`.
    #[inline]
    pub const fn contains(&self, index: Index) -> bool {
        index >= self.location && index - self.location < self.length
    }

    /// The smallest range spanning both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &IndexRange) -> IndexRange {
        let start = self.location.min(other.location);
        let end = self.max().max(other.max());
        IndexRange::from_bounds(start, end)
    }

    /// The overlapping part of `self` and `other`, or `None` if they share no
    /// index.
    #[inline]
    pub fn intersection(&self, other: &IndexRange) -> Option<IndexRange> {
        let start = self.location.max(other.location);
        let end = self.max().min(other.max());
        (end > start).then(|| IndexRange::from_bounds(start, end))
    }

    #[inline]
    pub fn as_range(&self) -> Range<Index> {
        self.location..self.max()
    }

    /// Fails with `RangeOverflow` unless every index of the range lies below
    /// [`NOT_FOUND`].
    #[inline]
    pub(crate) fn verify_storable(&self) -> Result<()> {
        match self.checked_max() {
            Some(_) => Ok(()),
            None => range_overflow(self.location, self.length),
        }
    }
}

impl From<Range<Index>> for IndexRange {
    #[inline]
    fn from(r: Range<Index>) -> Self {
        IndexRange::from_bounds(r.start, r.end)
    }
}

impl From<IndexRange> for Range<Index> {
    #[inline]
    fn from(r: IndexRange) -> Self {
        r.as_range()
    }
}

impl std::fmt::Display for IndexRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.length == 1 {
            write!(f, "{}", self.location)
        } else {
            write!(f, "{}..{}", self.location, self.max())
        }
    }
}
