//! Tim sort (simplified)
//!
//! Insertion-sorts fixed runs of [`MIN_RUN`] elements, then merges
//! neighbouring runs bottom-up, doubling the run width each round. There is
//! no natural-run detection or galloping; the point is the two-phase shape.
//!
//! Stable: both phases are.

use crate::drivers::{insertion, merge};
use crate::element::Element;
use crate::step::{Step, Stepper};

pub const MIN_RUN: usize = 32;

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let n = data.len();

    let mut start = 0;
    while start < n {
        let end = (start + MIN_RUN - 1).min(n - 1);
        insertion::sort_range(data, stepper, start, end)?;
        start += MIN_RUN;
    }

    let mut width = MIN_RUN;
    while width < n {
        let mut lo = 0;
        while lo < n {
            let mid = lo + width - 1;
            let hi = (lo + 2 * width - 1).min(n - 1);
            if mid < hi {
                merge::merge_runs(data, stepper, lo, mid, hi)?;
            }
            lo += 2 * width;
        }
        width *= 2;
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
    fn test_sort_spanning_several_runs() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..(MIN_RUN * 5 + 7) as u32)
            .map(|_| rng.gen_range(0..500))
            .collect();
        let mut expected = data.clone();
        expected.sort();

        drive(&mut data, sort);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_short_input_is_plain_insertion() {
        let mut data = vec![3u32, 2, 1];
        let (_, tim_sink) = drive(&mut data, sort);
        let mut again = vec![3u32, 2, 1];
        let (_, insertion_sink) = drive(&mut again, insertion::sort);
        assert_eq!(tim_sink.frames(), insertion_sink.frames());
    }

    #[test]
    fn test_stable() {
        let mut rng = rand::thread_rng();
        let values: Vec<u32> = (0..150).map(|_| rng.gen_range(0..8)).collect();
        let mut data = tag(&values);
        drive(&mut data, sort);
        assert!(is_sorted(&data));
        assert_stable(&data);
    }
}
