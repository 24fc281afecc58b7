//! Selection sort
//!
//! Scans the unsorted suffix for its minimum and swaps it into place. The
//! front index is marked sorted after every pass.

use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if stepper.compare(data, j, min)?.is_lt() {
                min = j;
            }
        }
        if min != i {
            stepper.swap(data, i, min)?;
        }
        stepper.mark_sorted(i);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::testing::drive;
    use crate::element::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..200).map(|_| rng.gen_range(0..1000)).collect();
        let mut expected = data.clone();
        expected.sort();

        drive(&mut data, sort);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_comparison_count_is_quadratic() {
        let mut data: Vec<u32> = (0..10).collect();
        let (_, sink) = drive(&mut data, sort);
        assert_eq!(sink.comparisons(), 45);
        assert_eq!(sink.moves(), 0);
    }

    #[test]
    fn test_one_swap_per_pass_at_most() {
        let mut data = vec![3u32, 2, 1];
        let (_, sink) = drive(&mut data, sort);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(sink.moves(), 1);
    }
}
