//! Heap sort
//!
//! Builds a max-heap in place, then repeatedly swaps the root behind the
//! shrinking heap. Each extracted slot is marked sorted immediately.

use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let len = data.len();
    sort_range(data, stepper, 0, len)
}

/// Heap sort of `data[lo..lo + len]`.
///
/// Heap positions are relative to `lo`; every index handed to the stepper is
/// translated back to an absolute one. Intro sort uses this as its fallback
/// once a partition exceeds the recursion budget.
pub(crate) fn sort_range<T: Element>(
    data: &mut [T],
    stepper: &mut Stepper<'_, T>,
    lo: usize,
    len: usize,
) -> Step {
    for root in (0..len / 2).rev() {
        sift_down(data, stepper, lo, root, len)?;
    }
    for end in (1..len).rev() {
        stepper.swap(data, lo, lo + end)?;
        stepper.mark_sorted(lo + end);
        sift_down(data, stepper, lo, 0, end)?;
    }
    Ok(())
}

fn sift_down<T: Element>(
    data: &mut [T],
    stepper: &mut Stepper<'_, T>,
    lo: usize,
    mut root: usize,
    len: usize,
) -> Step {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < len && stepper.compare(data, lo + left, lo + largest)?.is_gt() {
            largest = left;
        }
        if right < len && stepper.compare(data, lo + right, lo + largest)?.is_gt() {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }
        stepper.swap(data, lo + root, lo + largest)?;
        root = largest;
    }
}
