//! Testing helpers.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Asserts that `actual` is a rearrangement of `expected`: same length, same multiset.
pub fn assert_permutation_of<T: Eq + Hash + Debug>(expected: &[T], actual: &[T]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    let mut counts = FxHashMap::default();
    for item in expected {
        *counts.entry(item).or_insert(0i32) += 1;
    }
    for item in actual {
        *counts.entry(item).or_insert(0i32) -= 1;
    }
    let unbalanced: Vec<_> = counts.into_iter().filter(|&(_, count)| count != 0).collect();
    assert!(
        unbalanced.is_empty(),
        "{actual:?} is not a permutation of {expected:?}; unbalanced: {unbalanced:?}"
    );
}

/// Asserts that no two elements yielded by `items` are equal, returning the number of elements.
pub fn assert_distinct<T: Eq + Hash + Debug>(items: impl IntoIterator<Item = T>) -> usize {
    let mut seen = FxHashSet::default();
    for item in items {
        let message = format!("duplicate {item:?}");
        assert!(seen.insert(item), "{message}");
    }
    seen.len()
}
