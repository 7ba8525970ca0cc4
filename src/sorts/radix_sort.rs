//! LSD radix sort over non-negative integers.
//!
//! One stable counting pass per decimal digit position, least significant
//! first. Each pass is keyed on `(value / exp) % 10`; because every pass is
//! stable, the final pass leaves the values ordered by their full magnitude.
//!
//! Descending output needs no final reversal: the per-pass prefix sums are
//! accumulated from digit 9 downward instead of digit 0 upward, which
//! places the runs in reverse digit order while staying stable.
//!
//! ## Characteristics
//!
//!  * O(n·k) time, k = decimal digits of the maximum value
//!  * O(n + 10) auxiliary space
//!  * domain restricted to non-negative values; empty and negative inputs
//!    are reported as errors

use crate::utils::{digit_at, digit_prefix_sums};
use crate::{SortError, SortOrder};

/// Sorts a copy of `input` digit by digit.
///
/// Fails with [`SortError::EmptyInput`] when no maximum exists to derive
/// the pass count from, and with [`SortError::NegativeValue`] when digit
/// extraction would be undefined.
pub fn radix_sort(input: &[i64], order: SortOrder) -> Result<Vec<i64>, SortError> {
    if input.is_empty() {
        return Err(SortError::EmptyInput);
    }

    if let Some(&value) = input.iter().find(|&&v| v < 0) {
        return Err(SortError::NegativeValue { value });
    }

    let mut bucket = input.to_vec();
    let max = bucket.iter().copied().max().unwrap_or(0);

    let mut exp: i64 = 1;
    while max / exp > 0 {
        bucket = counting_pass(&bucket, exp, order);

        // A 19-digit maximum would overflow the next position multiplier;
        // every digit has been processed by then.
        exp = match exp.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(bucket)
}

/// One stable counting-sort pass keyed on the digit selected by `exp`.
fn counting_pass(src: &[i64], exp: i64, order: SortOrder) -> Vec<i64> {
    #[cfg(feature = "work_profiles")]
    println!("({exp}) DIGIT_PASS");

    let mut counts = [0usize; 10];
    for &value in src {
        counts[digit_at(value, exp)] += 1;
    }

    let mut cursors = digit_prefix_sums(&counts, order);

    // Right-to-left placement keeps equal digits in their previous-pass
    // order; each cursor starts one past the end of its digit's run.
    let mut dst = vec![0i64; src.len()];
    for &value in src.iter().rev() {
        let digit = digit_at(value, exp);
        cursors[digit] -= 1;
        dst[cursors[digit]] = value;
    }

    dst
}
