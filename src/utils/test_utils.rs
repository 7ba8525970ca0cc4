use crate::SortOrder;
use rand::{thread_rng, Rng};

/// Inputs every sort must handle: empty, singleton, pre-sorted, reversed,
/// constant, small fixed, and large random.
pub fn gen_input_set() -> Vec<Vec<i64>> {
    let mut rng = thread_rng();
    let random: Vec<i64> = (0..1_000).map(|_| rng.gen_range(-10_000..10_000)).collect();

    vec![
        vec![],
        vec![42],
        (0..100).collect(),
        (0..100).rev().collect(),
        vec![7; 50],
        vec![64, 34, 25, 12, 22, 11, 90],
        random,
    ]
}

/// Runs `sort_fn` on `input` and checks the full contract against a std
/// sort reference: ordering, permutation, length, and non-mutation.
pub fn validate_sort<F>(input: &[i64], order: SortOrder, sort_fn: &F)
where
    F: Fn(&[i64], SortOrder) -> Vec<i64>,
{
    let before = input.to_vec();
    let output = sort_fn(input, order);

    let mut expected = input.to_vec();
    expected.sort_unstable();
    if order == SortOrder::Descending {
        expected.reverse();
    }

    assert_eq!(output, expected);
    assert_eq!(input, &before[..], "caller's input must not be mutated");
}

/// Runs the shared input set through `sort_fn` in both directions.
pub fn sort_comparison_suite<F>(sort_fn: F)
where
    F: Fn(&[i64], SortOrder) -> Vec<i64>,
{
    for input in gen_input_set() {
        validate_sort(&input, SortOrder::Ascending, &sort_fn);
        validate_sort(&input, SortOrder::Descending, &sort_fn);
    }
}

/// Text counterpart of the comparison suite, lexicographic order.
pub fn string_sort_suite<F>(sort_fn: F)
where
    F: Fn(&[String], SortOrder) -> Vec<String>,
{
    let fruit: Vec<String> = ["banana", "apple", "orange", "pineapple", "grape"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let ascending = sort_fn(&fruit, SortOrder::Ascending);
    assert_eq!(
        ascending,
        vec!["apple", "banana", "grape", "orange", "pineapple"]
    );

    let descending = sort_fn(&fruit, SortOrder::Descending);
    assert_eq!(
        descending,
        vec!["pineapple", "orange", "grape", "banana", "apple"]
    );

    // Input untouched, empty and singleton still defined.
    assert_eq!(fruit[0], "banana");
    assert_eq!(sort_fn(&[], SortOrder::Ascending), Vec::<String>::new());
    assert_eq!(
        sort_fn(&[String::from("kiwi")], SortOrder::Descending),
        vec!["kiwi"]
    );
}
