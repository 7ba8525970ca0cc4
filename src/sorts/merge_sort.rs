//! Recursive top-down merge sort.
//!
//! The working copy is split at the midpoint (the left half is the smaller
//! one for odd lengths) until segments reach length 1, then sorted segments
//! are merged pairwise on the way back up.
//!
//! ## Characteristics
//!
//!  * O(n log n) time in every case
//!  * O(n) auxiliary space
//!  * stable

use crate::SortOrder;
use std::cmp::Ordering;

/// Sorts a copy of `input` by recursive divide-and-merge.
pub fn merge_sort<T>(input: &[T], order: SortOrder) -> Vec<T>
where
    T: Ord + Clone,
{
    split_and_merge(input.to_vec(), order)
}

fn split_and_merge<T: Ord>(mut bucket: Vec<T>, order: SortOrder) -> Vec<T> {
    if bucket.len() <= 1 {
        return bucket;
    }

    let right = bucket.split_off(bucket.len() / 2);
    let left = split_and_merge(bucket, order);
    let right = split_and_merge(right, order);

    merge(left, right, order)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>, order: SortOrder) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties take from the left segment, keeping equal elements in their
        // input order.
        if order.cmp(l, r) != Ordering::Greater {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    // One of these is already exhausted.
    merged.extend(left);
    merged.extend(right);

    merged
}
