//! Intro sort
//!
//! Quick sort with a median-of-three pivot and two escape hatches:
//!
//! - ranges of at most [`INSERTION_THRESHOLD`] elements are insertion-sorted
//! - once the recursion budget of `2 * floor(log2 n)` levels is spent, the
//!   range is heap-sorted instead of partitioned again
//!
//! The median-of-three comparisons and the move of the chosen pivot to the
//! end of the range are regular animated steps.

use crate::drivers::{heap, insertion, quick};
use crate::element::Element;
use crate::step::{Step, Stepper};

pub const INSERTION_THRESHOLD: usize = 16;
const DEPTH_FACTOR: usize = 2;

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let n = data.len();
    if n < 2 {
        return Ok(());
    }
    let depth_limit = DEPTH_FACTOR * n.ilog2() as usize;
    sort_range(data, stepper, 0, n - 1, depth_limit)
}

fn sort_range<T: Element>(
    data: &mut [T],
    stepper: &mut Stepper<'_, T>,
    lo: usize,
    hi: usize,
    depth: usize,
) -> Step {
    let len = hi - lo + 1;
    if len <= INSERTION_THRESHOLD {
        return insertion::sort_range(data, stepper, lo, hi);
    }
    if depth == 0 {
        return heap::sort_range(data, stepper, lo, len);
    }

    let pivot = median_of_three(data, stepper, lo, lo + (hi - lo) / 2, hi)?;
    if pivot != hi {
        stepper.swap(data, pivot, hi)?;
    }
    let p = quick::partition(data, stepper, lo, hi)?;
    stepper.mark_sorted(p);

    if p > lo {
        sort_range(data, stepper, lo, p - 1, depth - 1)?;
    }
    if p < hi {
        sort_range(data, stepper, p + 1, hi, depth - 1)?;
    }
    Ok(())
}

/// Index holding the median of `data[a]`, `data[b]`, `data[c]`.
fn median_of_three<T: Element>(
    data: &[T],
    stepper: &mut Stepper<'_, T>,
    a: usize,
    b: usize,
    c: usize,
) -> Step<usize> {
    let median = if stepper.compare(data, a, b)?.is_lt() {
        if stepper.compare(data, b, c)?.is_lt() {
            b
        } else if stepper.compare(data, a, c)?.is_lt() {
            c
        } else {
            a
        }
    } else if stepper.compare(data, a, c)?.is_lt() {
        a
    } else if stepper.compare(data, b, c)?.is_lt() {
        c
    } else {
        b
    };
    Ok(median)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::testing::drive;
    use crate::element::is_sorted;
    use rand::Rng;

    #[test]
    fn test_median_of_three() {
        let cases: [([u32; 3], usize); 6] = [
            ([1, 2, 3], 1),
            ([3, 2, 1], 1),
            ([2, 1, 3], 0),
            ([2, 3, 1], 0),
            ([1, 3, 2], 2),
            ([3, 1, 2], 2),
        ];
        for (values, expected) in cases {
            let mut data = values.to_vec();
            let (result, _) = drive(&mut data, |d, s| {
                let median = median_of_three(d, s, 0, 1, 2)?;
                assert_eq!(median, expected, "{:?}", values);
                Ok(())
            });
            assert!(result.is_ok());
        }
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..2000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        drive(&mut data, sort);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_small_input_uses_insertion() {
        let mut data: Vec<u32> = (0..INSERTION_THRESHOLD as u32).rev().collect();
        let (_, intro_sink) = drive(&mut data, sort);
        let mut again: Vec<u32> = (0..INSERTION_THRESHOLD as u32).rev().collect();
        let (_, insertion_sink) = drive(&mut again, insertion::sort);
        assert_eq!(intro_sink.frames(), insertion_sink.frames());
    }

    #[test]
    fn test_many_duplicates_fall_back_cleanly() {
        // all-equal input drives Lomuto partitions to the worst case and
        // exhausts the depth budget, exercising the heap fallback
        let mut data = vec![7u32; 300];
        drive(&mut data, sort);
        assert_eq!(data, vec![7; 300]);

        let mut rng = rand::thread_rng();
        let mut mixed: Vec<u32> = (0..300).map(|_| rng.gen_range(0..3)).collect();
        drive(&mut mixed, sort);
        assert!(is_sorted(&mixed));
    }
}
