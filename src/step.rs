//! Step emission
//!
//! [`Stepper`] is the one place where the run contract is enforced. Every
//! visible driver step goes through it and follows the same sequence:
//!
//! 1. check the run-control token, bail out with [`Cancelled`] if stopped
//! 2. apply the mutation, if any
//! 3. publish the highlight sets, then the post-step array snapshot
//! 4. pause for the current speed
//!
//! Drivers propagate [`Cancelled`] with `?`, which makes the cooperative
//! abort a plain early return. Nothing is published after the token flips.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::control::RunControl;
use crate::element::Element;
use crate::pacing::{Delay, Speed};
use crate::sink::{Highlights, VisualSink};

/// The run was stopped through its run-control token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Result of a single visible step.
pub type Step<T = ()> = Result<T, Cancelled>;

/// Drives one run: publishes every step to the sink and paces it.
///
/// Holds the `sorted` set accumulated by the driver. A stepper can be reused
/// for several runs; each run starts from an empty set.
pub struct Stepper<'a, T> {
    sink: &'a dyn VisualSink<T>,
    delay: &'a dyn Delay,
    speed: &'a Speed,
    control: &'a RunControl,
    sorted: BTreeSet<usize>,
}

impl<'a, T: Element> Stepper<'a, T> {
    /// Borrow the run's sink, delay, live speed and token.
    pub fn new(
        sink: &'a dyn VisualSink<T>,
        delay: &'a dyn Delay,
        speed: &'a Speed,
        control: &'a RunControl,
    ) -> Self {
        Stepper {
            sink,
            delay,
            speed,
            control,
            sorted: BTreeSet::new(),
        }
    }

    /// Check the token without publishing anything.
    #[inline]
    pub fn checkpoint(&self) -> Step {
        if self.control.is_running() {
            Ok(())
        } else {
            Err(Cancelled)
        }
    }

    /// Announce that the given indices are about to be compared.
    ///
    /// Used when one side of the comparison lives outside the array (a held
    /// insertion key, a merge buffer) so the driver compares by itself.
    pub fn inspect(&mut self, data: &[T], indices: &[usize]) -> Step {
        self.checkpoint()?;
        self.emit(data, indices.to_vec(), Vec::new());
        Ok(())
    }

    /// Announce and evaluate `data[i]` against `data[j]`.
    pub fn compare(&mut self, data: &[T], i: usize, j: usize) -> Step<Ordering> {
        self.inspect(data, &[i, j])?;
        Ok(data[i].cmp(&data[j]))
    }

    /// Swap `data[i]` and `data[j]` and report both as moving.
    pub fn swap(&mut self, data: &mut [T], i: usize, j: usize) -> Step {
        self.checkpoint()?;
        data.swap(i, j);
        self.emit(data, Vec::new(), vec![i, j]);
        Ok(())
    }

    /// Overwrite `data[index]` with a value held outside the array.
    pub fn write(&mut self, data: &mut [T], index: usize, value: T) -> Step {
        self.checkpoint()?;
        data[index] = value;
        self.emit(data, Vec::new(), vec![index]);
        Ok(())
    }

    /// Copy `data[from]` into `data[to]`, as in an insertion-sort shift.
    pub fn shift(&mut self, data: &mut [T], from: usize, to: usize) -> Step {
        self.checkpoint()?;
        data[to] = data[from];
        self.emit(data, Vec::new(), vec![from, to]);
        Ok(())
    }

    /// Apply a whole-array rearrangement as a single step.
    ///
    /// Every index is reported as moving.
    pub fn rewrite<F>(&mut self, data: &mut [T], f: F) -> Step
    where
        F: FnOnce(&mut [T]),
    {
        self.checkpoint()?;
        f(data);
        self.emit(data, Vec::new(), (0..data.len()).collect());
        Ok(())
    }

    /// Forget the `sorted` set left by a previous run.
    pub(crate) fn reset(&mut self) {
        self.sorted.clear();
    }

    /// Record that `index` holds its final value. Shown with the next frame.
    pub fn mark_sorted(&mut self, index: usize) {
        self.sorted.insert(index);
    }

    /// Publish the terminal state: every index sorted, nothing else highlighted.
    ///
    /// Checks the token first so a run stopped during its last pause never
    /// reports itself as sorted.
    pub fn finish(&mut self, data: &[T]) -> Step {
        self.checkpoint()?;
        self.sorted = (0..data.len()).collect();
        self.sink.publish_highlights(Highlights {
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: (0..data.len()).collect(),
        });
        self.sink.publish_array(data.to_vec());
        Ok(())
    }

    fn emit(&self, data: &[T], comparing: Vec<usize>, swapping: Vec<usize>) {
        debug_assert!(
            comparing
                .iter()
                .chain(&swapping)
                .chain(&self.sorted)
                .all(|&i| i < data.len()),
            "highlight index out of range for length {}",
            data.len()
        );
        self.sink.publish_highlights(Highlights {
            comparing,
            swapping,
            sorted: self.sorted.iter().copied().collect(),
        });
        self.sink.publish_array(data.to_vec());
        self.delay.pause(self.speed.get());
    }
}
