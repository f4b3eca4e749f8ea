//! Sets of non-negative integer indices stored as coalesced ranges.
//!
//! An index set keeps its indices as a sorted sequence of disjoint,
//! non-adjacent half-open ranges, which makes it cheap in both memory and
//! traversal when the indices cluster into runs (e.g. the selected rows of an
//! array). It offers:
//!
//! - **Mutation**: insertion with coalescing of touching ranges and removal
//!   with splitting, through [`IndexSetBuilder`]
//! - **Queries**: size, first/last index, containment, and nearest-index
//!   search by predicate, all resolved with a binary search over the ranges
//! - **Enumeration**: ascending or descending callbacks with early stop, and
//!   double-ended iterators, over the whole set or a clipped sub-range
//!
//! # Key Types
//!
//! - [`IndexSet`] - An immutable, cheaply cloneable (reference-counted) set
//! - [`IndexSetBuilder`] - The mutable form, frozen with [`IndexSetBuilder::build`]
//! - [`IndexQuery`] - The read-only operations shared by both
//! - [`IndexRange`] - A `[location, location + length)` interval
//!
//! Queries that find nothing return the [`NOT_FOUND`] sentinel, which is never
//! a storable index.

pub mod builder;
pub mod enumerate;
pub mod index_set;
mod mutate;
pub mod query;
pub mod range;
mod range_store;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(test)]
mod tests;

pub use builder::IndexSetBuilder;
pub use enumerate::{ClippedRanges, EnumerateFlags, Indices};
pub use index_set::IndexSet;
pub use indexset_common::{Error, ErrorKind, Result};
pub use query::{IndexPredicate, IndexQuery};
pub use range::{Index, IndexRange, NOT_FOUND};
pub use range_store::find_position;
