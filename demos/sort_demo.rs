//! Console demonstration of every sort in both directions, using the
//! crate's public API only.
//!
//! Run with `cargo run --example sort_demo`.

use septsort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
    SortOrder,
};

fn show<T, F>(name: &str, input: &[T], sort_fn: F)
where
    T: std::fmt::Debug,
    F: Fn(&[T], SortOrder) -> Vec<T>,
{
    println!("{name}");
    println!("  original:   {input:?}");
    println!("  ascending:  {:?}", sort_fn(input, SortOrder::Ascending));
    println!("  descending: {:?}", sort_fn(input, SortOrder::Descending));
    println!();
}

fn main() {
    let numbers = vec![64, 34, 25, 12, 22, 11, 90];
    let fruit = vec!["banana", "apple", "orange", "pineapple", "grape"];

    show("bubble sort", &numbers, bubble_sort);
    show("insertion sort", &numbers, insertion_sort);
    show("selection sort", &numbers, selection_sort);
    show("merge sort", &numbers, merge_sort);
    show("quick sort", &numbers, quick_sort);
    show("heap sort", &numbers, heap_sort);

    show("quick sort (strings)", &fruit, quick_sort);
    show("merge sort (strings)", &fruit, merge_sort);

    let digits = vec![170, 45, 75, 90, 802, 24, 2, 66];
    println!("radix sort");
    println!("  original:   {digits:?}");
    match radix_sort(&digits, SortOrder::Ascending) {
        Ok(sorted) => println!("  ascending:  {sorted:?}"),
        Err(e) => println!("  ascending:  error: {e}"),
    }
    match radix_sort(&digits, SortOrder::Descending) {
        Ok(sorted) => println!("  descending: {sorted:?}"),
        Err(e) => println!("  descending: error: {e}"),
    }

    // Radix sort's domain is restricted; both failure modes are reported.
    match radix_sort(&[], SortOrder::Ascending) {
        Ok(sorted) => println!("  empty:      {sorted:?}"),
        Err(e) => println!("  empty:      error: {e}"),
    }
    match radix_sort(&[3, -7, 5], SortOrder::Ascending) {
        Ok(sorted) => println!("  negative:   {sorted:?}"),
        Err(e) => println!("  negative:   error: {e}"),
    }
}
