use std::{collections::HashSet, thread};

use crate::{
    ErrorKind, IndexPredicate, IndexQuery, IndexRange, IndexSet, IndexSetBuilder, NOT_FOUND,
};

use super::range_bounds;

#[test]
fn test_init() {
    let set = IndexSet::empty();
    assert!(!set.is_mutable());
    assert_eq!(set.size(), 0);
    assert_eq!(set.first_index(), NOT_FOUND);
    assert_eq!(set.last_index(), NOT_FOUND);

    let set = IndexSet::from_index(0).unwrap();
    assert!(!set.is_mutable());
    assert_eq!(set.size(), 1);
    assert_eq!(set.first_index(), 0);
    assert_eq!(set.last_index(), 0);

    let set = IndexSet::from_range(IndexRange::new(0, 10)).unwrap();
    assert!(!set.is_mutable());
    assert_eq!(set.size(), 10);
    assert_eq!(set.first_index(), 0);
    assert_eq!(set.last_index(), 9);
}

#[test]
fn test_init_with_indices() {
    let even = IndexSet::from_indices(&[0, 2, 4, 6, 8]).unwrap();
    assert_eq!(even.size(), 5);
    assert_eq!(even.first_index(), 0);
    assert_eq!(even.last_index(), 8);
    assert_eq!(even.range_count(), 5);

    let odd = IndexSet::from_indices(&[1, 3, 5, 7, 9]).unwrap();
    assert_eq!(odd.size(), 5);
    assert_eq!(odd.first_index(), 1);
    assert_eq!(odd.last_index(), 9);

    let unsorted = IndexSet::from_indices(&[4, 2, 8, 0, 6]).unwrap();
    assert_eq!(unsorted, even);

    let duplicates = IndexSet::from_indices(&[4, 8, 2, 8, 0, 2, 6]).unwrap();
    assert_eq!(duplicates.size(), 5);
    assert_eq!(duplicates.first_index(), 0);
    assert_eq!(duplicates.last_index(), 8);

    let empty = IndexSet::from_indices(&[]).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_init_rejects_sentinel() {
    let err = IndexSet::from_index(NOT_FOUND).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::RangeOverflow { .. }));
    assert!(IndexSet::from_indices(&[1, NOT_FOUND]).is_err());
    assert!(IndexSet::from_range(IndexRange::new(5, NOT_FOUND)).is_err());
    assert!(IndexSet::try_from(IndexRange::new(0, NOT_FOUND)).is_ok());
}

#[test]
fn test_from_sorted_ranges() {
    let set = IndexSet::from_sorted_ranges(vec![IndexRange::new(0, 3), IndexRange::new(5, 3)])
        .unwrap();
    assert_eq!(set.size(), 6);
    assert_eq!(set, IndexSet::from_indices(&[0, 1, 2, 5, 6, 7]).unwrap());

    let err = IndexSet::from_sorted_ranges(vec![IndexRange::new(0, 3), IndexRange::new(3, 3)])
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
}

#[test]
fn test_reference_counting() {
    let set = IndexSet::from_range(IndexRange::new(0, 10)).unwrap();
    assert_eq!(set.ref_count(), 1);

    let other = set.clone();
    assert_eq!(set.ref_count(), 2);
    assert!(IndexSet::ptr_eq(&set, &other));

    let copy = IndexSet::copy_of(&set);
    assert_eq!(copy.ref_count(), 1);
    assert!(!IndexSet::ptr_eq(&set, &copy));
    assert_eq!(copy, set);

    drop(other);
    assert_eq!(set.ref_count(), 1);
}

#[test]
fn test_reinit() {
    let set = IndexSet::from_range(IndexRange::new(0, 10)).unwrap();
    let builder = set.reinit();
    assert!(builder.is_mutable());
    assert!(builder.is_empty());

    // With other handles alive their contents are left alone.
    let set = IndexSet::from_indices(&[1, 2, 3]).unwrap();
    let other = set.clone();
    let mut builder = set.reinit();
    assert!(builder.is_empty());
    builder.add_index(40).unwrap();
    assert_eq!(other.ref_count(), 1);
    assert_eq!(range_bounds(&other), vec![1..4]);

    let rebuilt = builder.build();
    assert_eq!(range_bounds(&rebuilt), vec![40..41]);
}

#[test]
fn test_to_builder() {
    let set = IndexSet::from_indices(&[1, 2, 3, 8]).unwrap();
    let mut builder = set.to_builder();
    builder.add_index(4).unwrap();
    builder.remove_index(8).unwrap();
    assert_eq!(range_bounds(&builder), vec![1..5]);
    // The source is unaffected.
    assert_eq!(range_bounds(&set), vec![1..4, 8..9]);

    let shared = set.clone();
    let mut builder = IndexSetBuilder::from(set);
    builder.add_index(0).unwrap();
    assert_eq!(range_bounds(&shared), vec![1..4, 8..9]);
    assert_eq!(range_bounds(&builder), vec![0..4, 8..9]);

    let frozen: IndexSet = builder.into();
    assert!(!frozen.is_mutable());
}

#[test]
fn test_add_scenario() {
    let mut builder = IndexSetBuilder::new();
    builder.add_index(5).unwrap();
    builder.add_indices(&[0, 1, 2]).unwrap();
    builder.add_indices(&[7, 6, 2]).unwrap();
    let set = builder.build();
    assert_eq!(set.size(), 6);
    assert_eq!(range_bounds(&set), vec![0..3, 5..8]);
    assert_eq!(set.first_index(), 0);
    assert_eq!(set.last_index(), 7);
}

#[test]
fn test_equality_and_hash() {
    let a = IndexSet::from_indices(&[1, 2, 3]).unwrap();
    let b = IndexSet::from_range(IndexRange::new(1, 3)).unwrap();
    let c = IndexSet::from_indices(&[1, 3]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut seen = HashSet::new();
    seen.insert(a);
    assert!(seen.contains(&b));
    assert!(!seen.contains(&c));
    assert_eq!(IndexSet::default(), IndexSet::empty());
}

#[test]
fn test_shared_across_threads() {
    let set = IndexSet::from_indices(&(0..1000).step_by(3).collect::<Vec<u64>>()).unwrap();
    let expected_size = set.size();

    let handles = (0..4)
        .map(|t| {
            let local = set.clone();
            thread::spawn(move || {
                let mut found = 0;
                for i in (t..1000).step_by(4) {
                    if local.contains_index(i) {
                        found += 1;
                    }
                }
                let next = local.nearest_index(IndexPredicate::GreaterThan, 500);
                (found, next, local.size())
            })
        })
        .collect::<Vec<_>>();

    let mut total = 0;
    for handle in handles {
        let (found, next, size) = handle.join().unwrap();
        total += found;
        assert_eq!(next, 501);
        assert_eq!(size, expected_size);
    }
    assert_eq!(total, expected_size);
    assert_eq!(set.ref_count(), 1);
}

#[test]
fn test_debug_output() {
    let set = IndexSet::from_indices(&[0, 1, 2, 5]).unwrap();
    assert_eq!(format!("{set:?}"), "IndexSet { size: 4, ranges: [0..3, 5] }");
}
