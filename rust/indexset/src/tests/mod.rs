use std::collections::BTreeSet;

use crate::{Index, IndexQuery, IndexRange};

mod index_set_tests;

/// Collects the stored ranges as `start..end` pairs.
fn range_bounds(set: &impl IndexQuery) -> Vec<std::ops::Range<Index>> {
    set.ranges().iter().map(IndexRange::as_range).collect()
}

/// Asserts that `set` holds exactly the indices of `expected`.
fn assert_matches_oracle(set: &impl IndexQuery, expected: &BTreeSet<Index>) {
    assert_eq!(set.size(), expected.len() as u64);
    assert_eq!(
        set.indices().collect::<Vec<_>>(),
        expected.iter().copied().collect::<Vec<_>>()
    );
    assert_eq!(set.first(), expected.first().copied());
    assert_eq!(set.last(), expected.last().copied());
}
