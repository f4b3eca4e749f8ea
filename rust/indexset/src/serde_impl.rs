//! `serde` support: an [`IndexSet`] is written as the sequence of its
//! canonical ranges.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{IndexQuery, IndexRange, IndexSet};

impl Serialize for IndexSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.ranges())
    }
}

impl<'de> Deserialize<'de> for IndexSet {
    fn deserialize<D>(deserializer: D) -> Result<IndexSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ranges = Vec::<IndexRange>::deserialize(deserializer)?;
        IndexSet::from_sorted_ranges(ranges).map_err(D::Error::custom)
    }
}
