use crate::SortOrder;
use std::cmp::Ordering;

/// Sorts by growing a sorted prefix, sinking each next element into its
/// slot.
///
/// O(n²) worst case, O(n) on input already in the requested order. Each
/// element only moves past strictly out-of-order neighbours, so equal
/// elements keep their relative order and the sort is stable.
pub fn insertion_sort<T>(input: &[T], order: SortOrder) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut bucket = input.to_vec();

    for i in 1..bucket.len() {
        let mut j = i;

        // Stops at the first element that may stay ahead, never crossing
        // an equal one.
        while j > 0 && order.cmp(&bucket[j - 1], &bucket[j]) == Ordering::Greater {
            bucket.swap(j - 1, j);
            j -= 1;
        }
    }

    bucket
}
