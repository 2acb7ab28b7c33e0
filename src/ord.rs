//! Ordering helper for presorting N-ary GCD input

use std::cmp::Ordering;

/// Comparator producing a strict descending order, so that sorting with it
/// puts the largest value first.
///
/// The N-ary GCD fold starts with the two largest inputs: the larger pair
/// collapses to a small remainder fastest, which shrinks every later fold.
#[inline]
pub fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}
