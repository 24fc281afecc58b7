//! Bubble sort
//!
//! Adjacent compare-and-swap passes. Each pass settles the largest remaining
//! value at the end, which is marked sorted as soon as the pass ends. A pass
//! without swaps ends the run early.
//!
//! Stable: only strictly greater neighbours are swapped.

use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if stepper.compare(data, j, j + 1)?.is_gt() {
                stepper.swap(data, j, j + 1)?;
                swapped = true;
            }
        }
        stepper.mark_sorted(n - 1 - pass);
        if !swapped {
            break;
        }
    }
    Ok(())
}
