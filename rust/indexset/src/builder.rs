//! The mutable form of an index set.

use indexset_common::Result;
use itertools::Itertools;

use crate::{
    IndexSet,
    query::IndexQuery,
    range::{Index, IndexRange},
    range_store::RangeStore,
};

/// A mutable set of indices stored as coalesced ranges.
///
/// Every insertion entry point decomposes into range insertions that merge
/// overlapping and adjacent ranges; every removal entry point truncates or
/// splits the affected ranges. Indices must lie below
/// [`NOT_FOUND`](crate::NOT_FOUND): a call that would store the sentinel, or a
/// range reaching past it, fails with `RangeOverflow` and leaves the builder
/// unchanged.
///
/// [`build`](Self::build) freezes the builder into an immutable, shareable
/// [`IndexSet`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexSetBuilder {
    store: RangeStore,
}

impl IndexSetBuilder {
    /// Creates an empty, mutable set.
    pub fn new() -> IndexSetBuilder {
        IndexSetBuilder {
            store: RangeStore::new(),
        }
    }

    /// Creates an empty set with room for `capacity` ranges.
    pub fn with_capacity(capacity: usize) -> IndexSetBuilder {
        IndexSetBuilder {
            store: RangeStore::with_capacity(capacity),
        }
    }

    pub(crate) fn from_store(store: RangeStore) -> IndexSetBuilder {
        IndexSetBuilder { store }
    }

    pub fn add_index(&mut self, index: Index) -> Result<()> {
        self.add_range(IndexRange::point(index))
    }

    /// Adds every index of `indices`, which may be unsorted and contain
    /// duplicates.
    ///
    /// The list is validated as a whole before anything is inserted, then
    /// sorted and grouped into runs so that each run costs one range insertion.
    pub fn add_indices(&mut self, indices: &[Index]) -> Result<()> {
        for &index in indices {
            IndexRange::point(index).verify_storable()?;
        }
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        let runs = sorted
            .into_iter()
            .dedup()
            .map(IndexRange::point)
            .coalesce(|prev, next| {
                if prev.max() == next.location {
                    Ok(prev.union(&next))
                } else {
                    Err((prev, next))
                }
            });
        for run in runs {
            self.store.insert_range(run);
        }
        self.trace("add_indices");
        Ok(())
    }

    /// Adds every index of `range`. An empty range is a no-op.
    pub fn add_range(&mut self, range: IndexRange) -> Result<()> {
        range.verify_storable()?;
        self.store.insert_range(range);
        self.trace("add_range");
        Ok(())
    }

    /// Adds every index of `other` (set union).
    pub fn add_set(&mut self, other: &IndexSet) {
        self.store.insert_ranges(other.ranges());
        self.trace("add_set");
    }

    /// Adds every index of another builder (set union).
    pub fn add_builder(&mut self, other: &IndexSetBuilder) {
        self.store.insert_ranges(other.ranges());
        self.trace("add_builder");
    }

    /// Removes `index`; a no-op if it is not in the set.
    pub fn remove_index(&mut self, index: Index) -> Result<()> {
        self.remove_range(IndexRange::point(index))
    }

    /// Removes every index of `range`, splitting a stored range that holds it.
    pub fn remove_range(&mut self, range: IndexRange) -> Result<()> {
        range.verify_storable()?;
        self.store.remove_range(range);
        self.trace("remove_range");
        Ok(())
    }

    /// Removes every index of `other` (set difference).
    pub fn remove_set(&mut self, other: &IndexSet) {
        self.store.remove_ranges(other.ranges());
        self.trace("remove_set");
    }

    /// Removes all indices, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.store.clear();
        self.trace("clear");
    }

    /// Makes the set immutable.
    pub fn build(self) -> IndexSet {
        IndexSet::from_store(self.store)
    }

    /// Returns the number of heap-allocated bytes used by the range storage.
    pub fn heap_size_bytes(&self) -> usize {
        self.store.heap_size_bytes()
    }

    /// Panics if the range store invariants do not hold.
    pub fn check_invariants(&self) {
        self.store.check_invariants();
    }

    fn trace(&self, op: &str) {
        log::trace!("{op}: {} ranges {}", self.store.len(), self.store);
    }
}

impl IndexQuery for IndexSetBuilder {
    #[inline]
    fn ranges(&self) -> &[IndexRange] {
        self.store.ranges()
    }

    #[inline]
    fn is_mutable(&self) -> bool {
        true
    }
}

impl From<IndexSet> for IndexSetBuilder {
    fn from(set: IndexSet) -> Self {
        set.into_builder()
    }
}

impl std::fmt::Debug for IndexSetBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexSetBuilder")
            .field("size", &self.size())
            .field("ranges", &format_args!("{}", self.store))
            .finish()
    }
}
