use crate::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
    SortError, SortOrder,
};
use std::cmp::Ordering;

/// Element whose ordering ignores the tag, for observing how each sort
/// treats equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tagged {
    key: i64,
    tag: char,
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged(pairs: &[(i64, char)]) -> Vec<Tagged> {
    pairs.iter().map(|&(key, tag)| Tagged { key, tag }).collect()
}

fn tags(sorted: &[Tagged]) -> Vec<char> {
    sorted.iter().map(|t| t.tag).collect()
}

#[test]
pub fn test_bubble_sort_scenario() {
    let input = vec![64, 34, 25, 12, 22, 11, 90];

    assert_eq!(
        bubble_sort(&input, SortOrder::Ascending),
        vec![11, 12, 22, 25, 34, 64, 90]
    );
    assert_eq!(
        bubble_sort(&input, SortOrder::Descending),
        vec![90, 64, 34, 25, 22, 12, 11]
    );
}

#[test]
pub fn test_quick_sort_strings_scenario() {
    let fruit = vec!["banana", "apple", "orange", "pineapple", "grape"];

    assert_eq!(
        quick_sort(&fruit, SortOrder::Ascending),
        vec!["apple", "banana", "grape", "orange", "pineapple"]
    );
}

#[test]
pub fn test_radix_sort_scenario() {
    let input = vec![170, 45, 75, 90, 802, 24, 2, 66];

    assert_eq!(
        radix_sort(&input, SortOrder::Ascending),
        Ok(vec![2, 24, 45, 66, 75, 90, 170, 802])
    );
    assert_eq!(
        radix_sort(&input, SortOrder::Descending),
        Ok(vec![802, 170, 90, 75, 66, 45, 24, 2])
    );
}

#[test]
pub fn test_heap_sort_singleton() {
    assert_eq!(heap_sort(&[5], SortOrder::Ascending), vec![5]);
    assert_eq!(heap_sort(&[5], SortOrder::Descending), vec![5]);
}

#[test]
pub fn test_merge_sort_empty() {
    assert_eq!(merge_sort::<i64>(&[], SortOrder::Ascending), vec![]);
}

#[test]
pub fn test_radix_sort_empty_is_reported() {
    assert_eq!(
        radix_sort(&[], SortOrder::Descending),
        Err(SortError::EmptyInput)
    );
}

#[test]
pub fn test_stable_sorts_preserve_tag_order() {
    let input = tagged(&[(5, 'a'), (3, 'x'), (5, 'b'), (1, 'y'), (5, 'c')]);

    for sort_fn in [
        bubble_sort::<Tagged>,
        insertion_sort::<Tagged>,
        merge_sort::<Tagged>,
    ] {
        let ascending = sort_fn(&input, SortOrder::Ascending);
        assert_eq!(tags(&ascending), vec!['y', 'x', 'a', 'b', 'c']);

        let descending = sort_fn(&input, SortOrder::Descending);
        assert_eq!(tags(&descending), vec!['a', 'b', 'c', 'x', 'y']);
    }
}

#[test]
pub fn test_selection_sort_reorders_equal_elements() {
    // The long-distance swap at position 0 carries 'a' past 'b'.
    let input = tagged(&[(2, 'a'), (2, 'b'), (1, 'c')]);

    let sorted = selection_sort(&input, SortOrder::Ascending);

    assert_eq!(tags(&sorted), vec!['c', 'b', 'a']);
}

#[test]
pub fn test_all_sorts_agree() {
    let input: Vec<i64> = vec![83, 5, 5, 0, 991, 83, 42, 17, 293, 1, 0, 77];

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let expected = merge_sort(&input, order);

        assert_eq!(bubble_sort(&input, order), expected);
        assert_eq!(insertion_sort(&input, order), expected);
        assert_eq!(selection_sort(&input, order), expected);
        assert_eq!(quick_sort(&input, order), expected);
        assert_eq!(heap_sort(&input, order), expected);
        assert_eq!(radix_sort(&input, order), Ok(expected));
    }
}

#[test]
pub fn test_sorting_sorted_input_is_identity() {
    let ascending: Vec<i64> = (0..64).collect();
    let descending: Vec<i64> = (0..64).rev().collect();

    assert_eq!(quick_sort(&ascending, SortOrder::Ascending), ascending);
    assert_eq!(heap_sort(&descending, SortOrder::Descending), descending);
    assert_eq!(
        radix_sort(&ascending, SortOrder::Ascending),
        Ok(ascending.clone())
    );
}
