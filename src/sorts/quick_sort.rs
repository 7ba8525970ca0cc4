//! Recursive quicksort with Lomuto partitioning.
//!
//! The pivot is the last element of the active range. Elements that compare
//! equal to the pivot move to the lower partition.
//!
//! ## Characteristics
//!
//!  * O(n log n) average time, O(n²) when the pivot is repeatedly an
//!    extreme value (e.g. already-sorted input)
//!  * recursion depth follows the partition balance, O(n) in the worst case
//!  * not stable

use crate::SortOrder;
use std::cmp::Ordering;

/// Sorts a copy of `input` by recursive partitioning around a pivot.
pub fn quick_sort<T>(input: &[T], order: SortOrder) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut bucket = input.to_vec();

    if bucket.len() > 1 {
        let high = bucket.len() - 1;
        quick_sort_range(&mut bucket, 0, high, order);
    }

    bucket
}

fn quick_sort_range<T: Ord>(bucket: &mut [T], low: usize, high: usize, order: SortOrder) {
    if low >= high {
        return;
    }

    let pivot_idx = partition(bucket, low, high, order);

    if pivot_idx > low {
        quick_sort_range(bucket, low, pivot_idx - 1, order);
    }
    if pivot_idx < high {
        quick_sort_range(bucket, pivot_idx + 1, high, order);
    }
}

/// Partitions `bucket[low..=high]` around `bucket[high]` and returns the
/// pivot's final index.
fn partition<T: Ord>(bucket: &mut [T], low: usize, high: usize, order: SortOrder) -> usize {
    // First index not yet known to belong on the pivot's side.
    let mut boundary = low;

    for j in low..high {
        if order.cmp(&bucket[j], &bucket[high]) != Ordering::Greater {
            bucket.swap(boundary, j);
            boundary += 1;
        }
    }

    bucket.swap(boundary, high);

    boundary
}
