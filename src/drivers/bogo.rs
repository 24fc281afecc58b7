//! Bogo sort
//!
//! Shuffle the whole array until it happens to be sorted. Termination is
//! only probabilistic, so each shuffle is a full step through the stepper:
//! one token check, one frame with every index moving, one pause. A stop
//! request therefore ends the run within one shuffle cycle.
//!
//! The sortedness check between shuffles is instantaneous and not animated.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::element::{is_sorted, Element};
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    sort_with_rng(data, stepper, &mut rand::thread_rng())
}

pub fn sort_with_rng<T, R>(data: &mut [T], stepper: &mut Stepper<'_, T>, rng: &mut R) -> Step
where
    T: Element,
    R: Rng + ?Sized,
{
    while !is_sorted(data) {
        stepper.rewrite(data, |d| d.shuffle(rng))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::testing::drive;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sorts_small_input() {
        let mut data = vec![3u32, 1, 2, 0];
        let mut rng = StdRng::seed_from_u64(7);
        let (result, sink) = drive(&mut data, |d, s| sort_with_rng(d, s, &mut rng));
        assert!(result.is_ok());
        assert_eq!(data, vec![0, 1, 2, 3]);
        assert!(sink.moves() >= 1);
    }

    #[test]
    fn test_sorted_input_never_shuffles() {
        let mut data = vec![1u32, 2, 3];
        let (_, sink) = drive(&mut data, sort);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_every_shuffle_reports_all_indices() {
        let mut data = vec![2u32, 1];
        let (_, sink) = drive(&mut data, sort);
        assert!(sink
            .highlights()
            .iter()
            .all(|h| h.swapping == vec![0, 1] && h.comparing.is_empty()));
    }
}
