mod bubble_sort;
mod heap_sort;
mod insertion_sort;
mod merge_sort;
mod quick_sort;
mod radix_sort;
mod selection_sort;

pub use bubble_sort::*;
pub use heap_sort::*;
pub use insertion_sort::*;
pub use merge_sort::*;
pub use quick_sort::*;
pub use radix_sort::*;
pub use selection_sort::*;
