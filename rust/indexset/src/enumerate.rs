//! Directional enumeration over the indices of a set, whole or within a
//! sub-range.

use std::ops::Range;

use bitflags::bitflags;

use crate::{
    range::{Index, IndexRange, NOT_FOUND},
    range_store::find_position,
};

bitflags! {
    /// Flags for [`IndexQuery::enumerate`](crate::IndexQuery::enumerate).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct EnumerateFlags: u32 {
        /// Visit indices in descending order.
        const REVERSE = 1 << 0;
    }
}

/// Visits the indices of `ranges ∩ query` in the order selected by `flags`,
/// stopping as soon as `f` returns `true`.
///
/// The upper bound of `query` is clipped at [`NOT_FOUND`]. Returns the number
/// of indices passed to `f`.
pub(crate) fn enumerate_in_range(
    ranges: &[IndexRange],
    query: IndexRange,
    flags: EnumerateFlags,
    mut f: impl FnMut(Index) -> bool,
) -> usize {
    let clipped = ClippedRanges::within(ranges, query);
    log::trace!(
        "enumerating {} of {} ranges within {query} ({})",
        clipped.len(),
        ranges.len(),
        if flags.contains(EnumerateFlags::REVERSE) {
            "backwards"
        } else {
            "forwards"
        }
    );

    let mut visited = 0;
    let mut visit = |index| {
        visited += 1;
        f(index)
    };
    let mut indices = Indices::new(clipped);
    if flags.contains(EnumerateFlags::REVERSE) {
        while let Some(index) = indices.next_back() {
            if visit(index) {
                break;
            }
        }
    } else {
        for index in indices {
            if visit(index) {
                break;
            }
        }
    }
    visited
}

/// Iterator over stored ranges clipped to a query range.
///
/// Only the first and the last yielded range can be affected by clipping.
#[derive(Clone)]
pub struct ClippedRanges<'a> {
    ranges: std::slice::Iter<'a, IndexRange>,
    clip_start: Index,
    clip_end: Index,
}

impl<'a> ClippedRanges<'a> {
    /// All of `ranges`, unclipped.
    #[inline]
    pub(crate) fn new(ranges: &'a [IndexRange]) -> Self {
        ClippedRanges {
            ranges: ranges.iter(),
            clip_start: 0,
            clip_end: NOT_FOUND,
        }
    }

    /// The part of `ranges` inside `query`.
    pub(crate) fn within(ranges: &'a [IndexRange], query: IndexRange) -> Self {
        let start = query.location;
        let end = query.max();
        if start >= end || ranges.is_empty() {
            return ClippedRanges::empty();
        }

        // First range ending after `start`; first range starting at or after `end`.
        let start_idx = find_position(ranges, start);
        let end_idx = ranges[start_idx..].partition_point(|r| r.location < end) + start_idx;

        ClippedRanges {
            ranges: ranges[start_idx..end_idx].iter(),
            clip_start: start,
            clip_end: end,
        }
    }

    #[inline]
    fn empty() -> Self {
        ClippedRanges {
            ranges: [].iter(),
            clip_start: 0,
            clip_end: 0,
        }
    }

    #[inline]
    fn clip(&self, r: &IndexRange) -> Range<Index> {
        let range = r.location.max(self.clip_start)..r.max().min(self.clip_end);
        debug_assert!(range.start < range.end);
        range
    }
}

impl<'a> Iterator for ClippedRanges<'a> {
    type Item = Range<Index>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.ranges.next().map(|r| self.clip(r))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl<'a> DoubleEndedIterator for ClippedRanges<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ranges.next_back().map(|r| self.clip(r))
    }
}

impl<'a> ExactSizeIterator for ClippedRanges<'a> {}

impl<'a> std::iter::FusedIterator for ClippedRanges<'a> {}

/// Iterator over individual indices, implemented by flattening [`ClippedRanges`].
#[derive(Clone)]
pub struct Indices<'a>(std::iter::Flatten<ClippedRanges<'a>>);

impl<'a> Indices<'a> {
    #[inline]
    pub(crate) fn new(ranges: ClippedRanges<'a>) -> Self {
        Indices(ranges.flatten())
    }
}

impl<'a> Iterator for Indices<'a> {
    type Item = Index;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Indices<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a> std::iter::FusedIterator for Indices<'a> {}
