//! The immutable, reference-counted form of an index set.

use std::sync::Arc;

use indexset_common::{Error, Result};

use crate::{
    builder::IndexSetBuilder,
    enumerate::Indices,
    query::IndexQuery,
    range::{Index, IndexRange},
    range_store::RangeStore,
};

/// An immutable set of indices stored as sorted, disjoint, non-adjacent
/// ranges.
///
/// `IndexSet` is a shared handle: cloning it acquires another reference to the
/// same ranges (an atomic increment), dropping a handle releases it, and the
/// range storage is freed with the last handle. Since the ranges are never
/// mutated after construction, an `IndexSet` can be queried from many threads
/// at once.
///
/// Mutation goes through [`IndexSetBuilder`]: [`to_builder`](Self::to_builder)
/// copies the contents into a new mutable set, and [`reinit`](Self::reinit)
/// discards them and hands back an empty one.
#[derive(Clone)]
pub struct IndexSet {
    store: Arc<RangeStore>,
}

impl IndexSet {
    pub(crate) fn from_store(store: RangeStore) -> IndexSet {
        store.debug_check_invariants();
        IndexSet {
            store: Arc::new(store),
        }
    }

    /// An immutable empty set.
    pub fn empty() -> IndexSet {
        IndexSet::from_store(RangeStore::new())
    }

    /// An immutable set holding exactly `index`.
    pub fn from_index(index: Index) -> Result<IndexSet> {
        IndexSet::from_range(IndexRange::point(index))
    }

    /// An immutable set holding every index of `indices`; duplicates collapse
    /// and the order does not matter.
    pub fn from_indices(indices: &[Index]) -> Result<IndexSet> {
        let mut builder = IndexSetBuilder::new();
        builder.add_indices(indices)?;
        Ok(builder.build())
    }

    /// An immutable set holding every index of `range`.
    pub fn from_range(range: IndexRange) -> Result<IndexSet> {
        let mut builder = IndexSetBuilder::with_capacity(1);
        builder.add_range(range)?;
        Ok(builder.build())
    }

    /// An immutable set holding a copy of the indices of `other`.
    ///
    /// Unlike [`clone`](Clone::clone), the result owns its own storage and
    /// starts with a reference count of one.
    pub fn copy_of(other: &IndexSet) -> IndexSet {
        IndexSet::from_store(other.store.as_ref().clone())
    }

    /// An immutable set over ranges that are already canonical: sorted by
    /// location, non-empty, neither overlapping nor adjacent, and ending at
    /// or below [`NOT_FOUND`](crate::NOT_FOUND).
    ///
    /// Fails with `InvalidFormat` otherwise.
    pub fn from_sorted_ranges(ranges: Vec<IndexRange>) -> Result<IndexSet> {
        RangeStore::from_sorted_ranges(ranges).map(IndexSet::from_store)
    }

    /// Number of live handles sharing this set.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.store)
    }

    /// Returns `true` if both handles refer to the same set.
    pub fn ptr_eq(a: &IndexSet, b: &IndexSet) -> bool {
        Arc::ptr_eq(&a.store, &b.store)
    }

    /// A mutable copy of this set.
    pub fn to_builder(&self) -> IndexSetBuilder {
        IndexSetBuilder::from_store(self.store.as_ref().clone())
    }

    /// Turns this handle into a mutable set with the same indices, copying
    /// the ranges only if other handles are still alive.
    pub fn into_builder(self) -> IndexSetBuilder {
        IndexSetBuilder::from_store(Arc::unwrap_or_clone(self.store))
    }

    /// Discards the contents and returns an empty mutable set.
    ///
    /// When this is the last handle the range buffer is reused; otherwise the
    /// remaining handles keep their contents and a fresh builder is returned.
    pub fn reinit(self) -> IndexSetBuilder {
        match Arc::try_unwrap(self.store) {
            Ok(mut store) => {
                store.clear();
                IndexSetBuilder::from_store(store)
            }
            Err(shared) => {
                log::trace!(
                    "reinit of a set with {} other handles",
                    Arc::strong_count(&shared) - 1
                );
                IndexSetBuilder::new()
            }
        }
    }

    /// Returns the number of heap-allocated bytes used by the range storage.
    pub fn heap_size_bytes(&self) -> usize {
        self.store.heap_size_bytes()
    }
}

impl IndexQuery for IndexSet {
    #[inline]
    fn ranges(&self) -> &[IndexRange] {
        self.store.ranges()
    }

    #[inline]
    fn is_mutable(&self) -> bool {
        false
    }
}

impl Default for IndexSet {
    fn default() -> Self {
        IndexSet::empty()
    }
}

impl PartialEq for IndexSet {
    fn eq(&self, other: &Self) -> bool {
        IndexSet::ptr_eq(self, other) || self.store == other.store
    }
}

impl Eq for IndexSet {}

impl std::hash::Hash for IndexSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.store.hash(state);
    }
}

impl From<IndexSetBuilder> for IndexSet {
    fn from(builder: IndexSetBuilder) -> Self {
        builder.build()
    }
}

impl TryFrom<IndexRange> for IndexSet {
    type Error = Error;

    fn try_from(range: IndexRange) -> Result<Self> {
        IndexSet::from_range(range)
    }
}

impl TryFrom<&[Index]> for IndexSet {
    type Error = Error;

    fn try_from(indices: &[Index]) -> Result<Self> {
        IndexSet::from_indices(indices)
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = Index;
    type IntoIter = Indices<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices()
    }
}

impl std::fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexSet")
            .field("size", &self.size())
            .field("ranges", &format_args!("{}", self.store))
            .finish()
    }
}
