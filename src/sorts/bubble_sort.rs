use crate::SortOrder;
use std::cmp::Ordering;

/// Sorts by repeated adjacent-pair passes, swapping inverted pairs.
///
/// O(n²) worst case, O(n) when the input already satisfies the requested
/// order: a pass with no swaps ends the sort. Equal neighbours are never
/// swapped, so the sort is stable.
pub fn bubble_sort<T>(input: &[T], order: SortOrder) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut bucket = input.to_vec();
    let n = bucket.len();

    for pass in 0..n {
        let mut swapped = false;

        // Each pass bubbles one more element into its final slot at the end.
        for j in 0..(n - 1 - pass) {
            if order.cmp(&bucket[j], &bucket[j + 1]) == Ordering::Greater {
                bucket.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            #[cfg(feature = "work_profiles")]
            println!("({pass}) BUBBLE_EARLY_EXIT");

            break;
        }
    }

    bucket
}
