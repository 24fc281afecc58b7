//! Merge sort
//!
//! Top-down: split at the midpoint, sort both halves, merge. The merge copies
//! both runs into buffers and writes the merged sequence back one slot per
//! step, highlighting the two run positions being compared.
//!
//! Stable: ties take from the left run.

use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    if data.len() < 2 {
        return Ok(());
    }
    split(data, stepper, 0, data.len() - 1)
}

fn split<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>, lo: usize, hi: usize) -> Step {
    if lo < hi {
        let mid = lo + (hi - lo) / 2;
        split(data, stepper, lo, mid)?;
        split(data, stepper, mid + 1, hi)?;
        merge_runs(data, stepper, lo, mid, hi)?;
    }
    Ok(())
}

/// Merge the sorted runs `data[lo..=mid]` and `data[mid + 1..=hi]`.
pub(crate) fn merge_runs<T: Element>(
    data: &mut [T],
    stepper: &mut Stepper<'_, T>,
    lo: usize,
    mid: usize,
    hi: usize,
) -> Step {
    let left = data[lo..=mid].to_vec();
    let right = data[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        stepper.inspect(data, &[lo + i, mid + 1 + j])?;
        let next = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        stepper.write(data, k, next)?;
        k += 1;
    }

    // a leftover right run already sits in its final slots
    for &value in &left[i..] {
        stepper.write(data, k, value)?;
        k += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::testing::{assert_stable, drive, tag};
    use crate::element::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..500).map(|_| rng.gen_range(0..100)).collect();
        let mut expected = data.clone();
        expected.sort();

        drive(&mut data, sort);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_merge_runs() {
        let mut data = vec![7u32, 1, 4, 9, 2, 3, 10, 0];
        drive(&mut data, |d, s| merge_runs(d, s, 1, 3, 6));
        assert_eq!(data, vec![7, 1, 2, 3, 4, 9, 10, 0]);
    }

    #[test]
    fn test_right_remainder_not_rewritten() {
        let mut data = vec![1u32, 2, 3, 4];
        let (_, sink) = drive(&mut data, |d, s| merge_runs(d, s, 0, 1, 3));
        // two comparisons, two writes for the left run, none for the right
        assert_eq!(sink.comparisons(), 2);
        assert_eq!(sink.moves(), 2);
    }

    #[test]
    fn test_stable() {
        let mut data = tag(&[5, 1, 5, 3, 1, 5, 3, 3, 0]);
        drive(&mut data, sort);
        assert!(is_sorted(&data));
        assert_stable(&data);
    }
}
