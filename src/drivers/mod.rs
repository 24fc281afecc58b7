//! Algorithm drivers
//!
//! One module per algorithm. Every driver has the same shape:
//!
//! ```ignore
//! pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step
//! ```
//!
//! A driver only mutates `data` through the [`Stepper`](crate::step::Stepper),
//! so each comparison and movement is published and paced, and a stopped
//! run-control token ends the driver at its next step. Drivers do not publish
//! the final "all sorted" frame; [`Algorithm::run`](crate::Algorithm::run)
//! does that once the driver returns `Ok`.
//!
//! All indices passed to the stepper are absolute positions in `data`, also
//! inside the range helpers shared between drivers (`insertion::sort_range`,
//! `merge::merge_runs`, `quick::partition`, `heap::sort_range`), so observers
//! always receive whole-array snapshots.

pub mod bogo;
pub mod bubble;
pub mod bucket;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod intro;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;
pub mod tim;

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers for driver unit tests.

    use crate::control::RunControl;
    use crate::element::Element;
    use crate::pacing::{NoDelay, Speed};
    use crate::sink::RecordingSink;
    use crate::step::{Step, Stepper};

    /// Value ordered by `value` only; `tag` records the input position.
    #[derive(Debug, Clone, Copy)]
    pub struct Tagged {
        pub value: u32,
        pub tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.value.cmp(&other.value)
        }
    }

    impl Element for Tagged {
        fn key(&self) -> u32 {
            self.value
        }
    }

    pub fn tag(values: &[u32]) -> Vec<Tagged> {
        values
            .iter()
            .enumerate()
            .map(|(tag, &value)| Tagged { value, tag })
            .collect()
    }

    /// Run a driver headless and return the recorded frames.
    pub fn drive<T, F>(data: &mut [T], driver: F) -> (Step, RecordingSink<T>)
    where
        T: Element,
        F: FnOnce(&mut [T], &mut Stepper<'_, T>) -> Step,
    {
        let sink = RecordingSink::new();
        let speed = Speed::from_millis(0);
        let control = RunControl::new();
        let result = {
            let mut stepper = Stepper::new(&sink, &NoDelay, &speed, &control);
            driver(data, &mut stepper)
        };
        (result, sink)
    }

    /// Assert that equal values kept their input order.
    pub fn assert_stable(sorted: &[Tagged]) {
        for pair in sorted.windows(2) {
            if pair[0].value == pair[1].value {
                assert!(
                    pair[0].tag < pair[1].tag,
                    "equal values reordered: {:?}",
                    pair
                );
            }
        }
    }
}
