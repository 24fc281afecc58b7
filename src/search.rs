//! Search drivers
//!
//! Linear and binary search animated under the same step contract as the
//! sorting drivers: every read checks the run-control token, highlights the
//! index being read and pauses once. Searching never moves data, so a run
//! publishes only `comparing` highlights and unchanged snapshots.
//!
//! The found index is returned in [`SearchOutcome`]; no extra frame is
//! published for it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::algorithm::TimeComplexity;
use crate::element::{is_sorted, Element};
use crate::error::EngineError;
use crate::step::{Cancelled, Step, Stepper};

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Index of the matching element.
    Found(usize),
    NotFound,
    Cancelled,
}

/// The searches with an animated driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Search {
    Linear,
    Binary,
}

impl Search {
    pub const ALL: [Search; 2] = [Search::Linear, Search::Binary];

    /// URL slug, e.g. `"binary-search"`.
    pub fn slug(self) -> &'static str {
        match self {
            Search::Linear => "linear-search",
            Search::Binary => "binary-search",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Search::Linear => "Linear Search",
            Search::Binary => "Binary Search",
        }
    }

    pub fn time(self) -> TimeComplexity {
        match self {
            Search::Linear => TimeComplexity {
                best: "O(1)",
                average: "O(n)",
                worst: "O(n)",
            },
            Search::Binary => TimeComplexity {
                best: "O(1)",
                average: "O(log n)",
                worst: "O(log n)",
            },
        }
    }

    /// Binary search only works on ascending input.
    pub fn check_input<T: Element>(self, data: &[T]) -> Result<(), EngineError> {
        if self == Search::Binary && !is_sorted(data) {
            return Err(EngineError::InvalidConfig(format!(
                "{} needs ascending input",
                self.slug()
            )));
        }
        Ok(())
    }

    /// Look for `target` in `data`, one paced read at a time.
    pub fn run<T: Element>(
        self,
        data: &[T],
        target: T,
        stepper: &mut Stepper<'_, T>,
    ) -> SearchOutcome {
        tracing::debug!(search = self.slug(), len = data.len(), "search started");
        stepper.reset();

        let result = match self {
            Search::Linear => linear(data, target, stepper),
            Search::Binary => binary(data, target, stepper),
        };
        let outcome = match result {
            Ok(Some(index)) => SearchOutcome::Found(index),
            Ok(None) => SearchOutcome::NotFound,
            Err(Cancelled) => SearchOutcome::Cancelled,
        };
        tracing::debug!(search = self.slug(), ?outcome, "search ended");
        outcome
    }
}

impl fmt::Display for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Search {
    type Err = EngineError;

    /// Accepts the slug (`"linear-search"`) or the bare name (`"linear"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("-search").unwrap_or(&wanted);
        Search::ALL
            .into_iter()
            .find(|a| a.slug().trim_end_matches("-search") == wanted)
            .ok_or_else(|| EngineError::UnknownAlgorithm(s.to_string()))
    }
}

/// Read left to right; first match wins.
pub fn linear<T: Element>(
    data: &[T],
    target: T,
    stepper: &mut Stepper<'_, T>,
) -> Step<Option<usize>> {
    for i in 0..data.len() {
        stepper.inspect(data, &[i])?;
        if data[i] == target {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Halve `[lo, hi)` around its lower middle until the target is hit or the
/// range is empty. `data` must be ascending.
pub fn binary<T: Element>(
    data: &[T],
    target: T,
    stepper: &mut Stepper<'_, T>,
) -> Step<Option<usize>> {
    debug_assert!(is_sorted(data), "binary search over unsorted input");
    let (mut lo, mut hi) = (0, data.len());
    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        stepper.inspect(data, &[mid])?;
        match data[mid].cmp(&target) {
            Ordering::Equal => return Ok(Some(mid)),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::RunControl;
    use crate::pacing::{Delay, NoDelay, Speed};
    use crate::sink::RecordingSink;
    use rand::Rng;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::time::Duration;

    fn search_headless(
        search: Search,
        data: &[u32],
        target: u32,
    ) -> (SearchOutcome, RecordingSink<u32>) {
        let sink = RecordingSink::<u32>::new();
        let speed = Speed::from_millis(0);
        let control = RunControl::new();
        let outcome = {
            let mut stepper = Stepper::new(&sink, &NoDelay, &speed, &control);
            search.run(data, target, &mut stepper)
        };
        (outcome, sink)
    }

    fn visited(sink: &RecordingSink<u32>) -> Vec<usize> {
        sink.highlights().iter().map(|h| h.comparing[0]).collect()
    }

    fn evens() -> Vec<u32> {
        (1..=15).map(|i| i * 2).collect()
    }

    /// Stops the token after a fixed number of pauses.
    struct StopAfter {
        control: RunControl,
        remaining: AtomicUsize,
    }

    impl Delay for StopAfter {
        fn pause(&self, _duration: Duration) {
            if self.remaining.fetch_sub(1, AtomicOrdering::SeqCst) == 1 {
                self.control.stop();
            }
        }
    }

    #[test]
    fn test_linear_found_first_match() {
        let data = vec![7u32, 3, 9, 3];
        let (outcome, sink) = search_headless(Search::Linear, &data, 3);
        assert_eq!(outcome, SearchOutcome::Found(1));
        assert_eq!(visited(&sink), vec![0, 1]);
        assert_eq!(sink.last_array(), Some(data));
    }

    #[test]
    fn test_linear_not_found_reads_everything() {
        let (outcome, sink) = search_headless(Search::Linear, &[4, 5, 6], 1);
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(visited(&sink), vec![0, 1, 2]);
        assert_eq!(sink.moves(), 0);
    }

    #[test]
    fn test_binary_visit_order() {
        let (outcome, sink) = search_headless(Search::Binary, &evens(), 30);
        assert_eq!(outcome, SearchOutcome::Found(14));
        assert_eq!(visited(&sink), vec![7, 11, 13, 14]);
    }

    #[test]
    fn test_binary_not_found() {
        let (outcome, sink) = search_headless(Search::Binary, &evens(), 5);
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(visited(&sink), vec![7, 3, 1, 2]);
    }

    #[test]
    fn test_binary_finds_random_member() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..200).map(|_| rng.gen_range(0..1000)).collect();
        data.sort_unstable();
        data.dedup();
        let index = rng.gen_range(0..data.len());
        let (outcome, sink) = search_headless(Search::Binary, &data, data[index]);
        assert_eq!(outcome, SearchOutcome::Found(index));
        // ceil(log2(200)) + 1
        assert!(sink.highlights().len() <= 9);
    }

    #[test]
    fn test_empty_input() {
        for search in Search::ALL {
            let (outcome, sink) = search_headless(search, &[], 1);
            assert_eq!(outcome, SearchOutcome::NotFound, "{}", search);
            assert!(sink.is_empty());
        }
    }

    #[test]
    fn test_cancel_mid_search() {
        for search in Search::ALL {
            let sink = RecordingSink::<u32>::new();
            let speed = Speed::from_millis(0);
            let control = RunControl::new();
            let delay = StopAfter {
                control: control.clone(),
                remaining: AtomicUsize::new(2),
            };
            let outcome = {
                let mut stepper = Stepper::new(&sink, &delay, &speed, &control);
                search.run(&evens(), 31, &mut stepper)
            };
            assert_eq!(outcome, SearchOutcome::Cancelled, "{}", search);
            assert_eq!(sink.highlights().len(), 2, "{}", search);
        }
    }

    #[test]
    fn test_stopped_token_reads_nothing() {
        let sink = RecordingSink::<u32>::new();
        let speed = Speed::from_millis(0);
        let control = RunControl::stopped();
        let mut stepper = Stepper::new(&sink, &NoDelay, &speed, &control);
        assert_eq!(
            Search::Linear.run(&[1u32, 2], 2, &mut stepper),
            SearchOutcome::Cancelled
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_check_input() {
        assert!(Search::Binary.check_input(&[1u32, 2, 2, 9]).is_ok());
        let err = Search::Binary.check_input(&[3u32, 1]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
        assert!(Search::Linear.check_input(&[3u32, 1]).is_ok());
    }

    #[test]
    fn test_parse() {
        assert_eq!("binary".parse::<Search>().unwrap(), Search::Binary);
        assert_eq!("Linear-Search".parse::<Search>().unwrap(), Search::Linear);
        assert!("bubble-sort".parse::<Search>().is_err());
        for search in Search::ALL {
            assert_eq!(search.to_string().parse::<Search>().unwrap(), search);
        }
    }
}
