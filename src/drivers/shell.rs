//! Shell sort
//!
//! Gapped insertion sort with gaps `n/2, n/4, ..., 1`. Not stable: a wide
//! gap can carry an element past an equal one.

use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let held = data[i];
            let mut j = i;
            while j >= gap {
                stepper.inspect(data, &[j - gap, j])?;
                if data[j - gap] <= held {
                    break;
                }
                stepper.shift(data, j - gap, j)?;
                j -= gap;
            }
            if j != i {
                stepper.write(data, j, held)?;
            }
        }
        gap /= 2;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::testing::{drive, tag};
    use crate::element::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..1000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        drive(&mut data, sort);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_first_gap_compares_halves() {
        let mut data = vec![4u32, 3, 2, 1];
        let (_, sink) = drive(&mut data, sort);
        let first = &sink.highlights()[0];
        assert_eq!(first.comparing, vec![0, 2]);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_equal_values_can_reorder() {
        let mut data = tag(&[2, 1, 1, 0]);
        drive(&mut data, sort);
        let tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
        assert!(is_sorted(&data));
        assert_eq!(tags, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_single_element_publishes_nothing() {
        let mut data = vec![1u32];
        let (_, sink) = drive(&mut data, sort);
        assert!(sink.is_empty());
    }
}
