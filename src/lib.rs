//! # septsort
//!
//! septsort is a library of seven classical in-memory sorting algorithms:
//! bubble, insertion, selection, merge, quick, heap, and radix sort.
//!
//! Every sort shares one contract: it takes a slice, clones it into a
//! private working copy, sorts the copy in the requested direction, and
//! returns it. The caller's input is never mutated.
//!
//! ## Usage
//!
//! ```
//! use septsort::{bubble_sort, SortOrder};
//!
//! let data = vec![64, 34, 25, 12, 22, 11, 90];
//! let sorted = bubble_sort(&data, SortOrder::Ascending);
//!
//! assert_eq!(sorted, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(data, vec![64, 34, 25, 12, 22, 11, 90]);
//! ```
//!
//! The comparison sorts are generic over `Ord`, so text sorts the same way
//! numbers do:
//!
//! ```
//! use septsort::{quick_sort, SortOrder};
//!
//! let fruit = vec!["banana", "apple", "orange", "pineapple", "grape"];
//!
//! assert_eq!(
//!     quick_sort(&fruit, SortOrder::Ascending),
//!     vec!["apple", "banana", "grape", "orange", "pineapple"],
//! );
//! ```
//!
//! ## Picking an algorithm
//!
//! * [`bubble_sort`], [`insertion_sort`] — O(n²), stable, O(n) best case
//!   on (nearly) sorted input.
//! * [`selection_sort`] — O(n²), not stable, at most n - 1 swaps.
//! * [`merge_sort`] — O(n log n), stable, O(n) auxiliary space.
//! * [`quick_sort`] — O(n log n) average, O(n²) worst case, not stable.
//! * [`heap_sort`] — O(n log n) guaranteed, not stable.
//! * [`radix_sort`] — O(n·k) over non-negative integers only; returns an
//!   error on empty or negative input instead of a sorted copy.

#[cfg(test)]
mod tests;

mod error;
mod order;
mod sorts;
mod utils;

pub use error::SortError;
pub use order::SortOrder;
pub use sorts::*;
