//! Algorithm catalog and the run entry point.
//!
//! [`Algorithm`] names every driver, carries the descriptive data shown next
//! to the visualization (complexities, stability) and dispatches a run.

use std::fmt;
use std::str::FromStr;

use crate::drivers;
use crate::element::Element;
use crate::error::EngineError;
use crate::step::{Cancelled, Stepper};

/// How a driver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The array is sorted and the final all-sorted frame was published.
    Completed,
    /// The run-control token was stopped; the array is left as last published.
    Cancelled,
}

/// The sorting algorithms with an animated driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
    Tim,
    Intro,
    Shell,
    Bogo,
}

/// Time complexity in best, average and worst case, in big-O notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time: TimeComplexity,
    pub space: &'static str,
    pub stable: bool,
}

const fn time(best: &'static str, average: &'static str, worst: &'static str) -> TimeComplexity {
    TimeComplexity {
        best,
        average,
        worst,
    }
}

impl Algorithm {
    /// Every algorithm, in catalog order.
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Tim,
        Algorithm::Intro,
        Algorithm::Shell,
        Algorithm::Bogo,
    ];

    /// URL slug, e.g. `"bubble-sort"`.
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble-sort",
            Algorithm::Selection => "selection-sort",
            Algorithm::Insertion => "insertion-sort",
            Algorithm::Merge => "merge-sort",
            Algorithm::Quick => "quick-sort",
            Algorithm::Heap => "heap-sort",
            Algorithm::Counting => "counting-sort",
            Algorithm::Radix => "radix-sort",
            Algorithm::Bucket => "bucket-sort",
            Algorithm::Tim => "tim-sort",
            Algorithm::Intro => "intro-sort",
            Algorithm::Shell => "shell-sort",
            Algorithm::Bogo => "bogo-sort",
        }
    }

    /// Display name, complexities and stability.
    pub fn info(self) -> AlgorithmInfo {
        let (name, time, space, stable) = match self {
            Algorithm::Bubble => ("Bubble Sort", time("O(n)", "O(n^2)", "O(n^2)"), "O(1)", true),
            Algorithm::Selection => (
                "Selection Sort",
                time("O(n^2)", "O(n^2)", "O(n^2)"),
                "O(1)",
                false,
            ),
            Algorithm::Insertion => (
                "Insertion Sort",
                time("O(n)", "O(n^2)", "O(n^2)"),
                "O(1)",
                true,
            ),
            Algorithm::Merge => (
                "Merge Sort",
                time("O(n log n)", "O(n log n)", "O(n log n)"),
                "O(n)",
                true,
            ),
            Algorithm::Quick => (
                "Quick Sort",
                time("O(n log n)", "O(n log n)", "O(n^2)"),
                "O(log n)",
                false,
            ),
            Algorithm::Heap => (
                "Heap Sort",
                time("O(n log n)", "O(n log n)", "O(n log n)"),
                "O(1)",
                false,
            ),
            Algorithm::Counting => (
                "Counting Sort",
                time("O(n + k)", "O(n + k)", "O(n + k)"),
                "O(k)",
                true,
            ),
            Algorithm::Radix => ("Radix Sort", time("O(nk)", "O(nk)", "O(nk)"), "O(n + k)", true),
            Algorithm::Bucket => (
                "Bucket Sort",
                time("O(n + k)", "O(n + k)", "O(n^2)"),
                "O(n + k)",
                false,
            ),
            Algorithm::Tim => (
                "Tim Sort",
                time("O(n)", "O(n log n)", "O(n log n)"),
                "O(n)",
                true,
            ),
            Algorithm::Intro => (
                "Intro Sort",
                time("O(n log n)", "O(n log n)", "O(n log n)"),
                "O(log n)",
                false,
            ),
            Algorithm::Shell => (
                "Shell Sort",
                time("O(n log n)", "O(n log^2 n)", "O(n log^2 n)"),
                "O(1)",
                false,
            ),
            Algorithm::Bogo => ("Bogo Sort", time("O(n)", "O((n+1)!)", "unbounded"), "O(1)", false),
        };
        AlgorithmInfo {
            name,
            time,
            space,
            stable,
        }
    }

    /// Reject input this algorithm cannot animate in bounded memory.
    ///
    /// Counting sort allocates one counter per key up to the largest, so keys
    /// above [`drivers::counting::MAX_KEY`] are refused.
    pub fn check_input<T: Element>(self, data: &[T]) -> Result<(), EngineError> {
        if self != Algorithm::Counting {
            return Ok(());
        }
        match data.iter().map(Element::key).max() {
            Some(max) if max > drivers::counting::MAX_KEY => Err(EngineError::InvalidConfig(
                format!(
                    "{} needs keys <= {}, got {}",
                    self.slug(),
                    drivers::counting::MAX_KEY,
                    max
                ),
            )),
            _ => Ok(()),
        }
    }

    /// Run this algorithm's driver over `data`.
    ///
    /// On success the final frame (every index sorted, no other highlight) is
    /// published before returning [`RunOutcome::Completed`]. If the token
    /// stops the run, nothing more is published and `data` is left as the
    /// last frame showed it.
    pub fn run<T: Element>(self, data: &mut [T], stepper: &mut Stepper<'_, T>) -> RunOutcome {
        tracing::debug!(algorithm = self.slug(), len = data.len(), "run started");
        stepper.reset();

        let result = match self {
            Algorithm::Bubble => drivers::bubble::sort(data, stepper),
            Algorithm::Selection => drivers::selection::sort(data, stepper),
            Algorithm::Insertion => drivers::insertion::sort(data, stepper),
            Algorithm::Merge => drivers::merge::sort(data, stepper),
            Algorithm::Quick => drivers::quick::sort(data, stepper),
            Algorithm::Heap => drivers::heap::sort(data, stepper),
            Algorithm::Counting => drivers::counting::sort(data, stepper),
            Algorithm::Radix => drivers::radix::sort(data, stepper),
            Algorithm::Bucket => drivers::bucket::sort(data, stepper),
            Algorithm::Tim => drivers::tim::sort(data, stepper),
            Algorithm::Intro => drivers::intro::sort(data, stepper),
            Algorithm::Shell => drivers::shell::sort(data, stepper),
            Algorithm::Bogo => drivers::bogo::sort(data, stepper),
        }
        .and_then(|()| stepper.finish(data));

        match result {
            Ok(()) => {
                debug_assert!(
                    crate::element::is_sorted(data),
                    "{} finished unsorted",
                    self.slug()
                );
                tracing::debug!(algorithm = self.slug(), "run completed");
                RunOutcome::Completed
            }
            Err(Cancelled) => {
                tracing::debug!(algorithm = self.slug(), "run cancelled");
                RunOutcome::Cancelled
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    /// Accepts the slug (`"quick-sort"`) or the bare name (`"quick"`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("-sort").unwrap_or(&wanted);
        Algorithm::ALL
            .into_iter()
            .find(|a| a.slug().trim_end_matches("-sort") == wanted)
            .ok_or_else(|| EngineError::UnknownAlgorithm(s.to_string()))
    }
}
