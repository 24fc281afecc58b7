//! Quick sort
//!
//! Lomuto partition around the last element of the range. Each pivot lands
//! in its final slot and is marked sorted right away. The driver recurses
//! into the smaller side and loops on the larger one, so stack depth stays
//! logarithmic even on already sorted input.

use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    if data.len() < 2 {
        return Ok(());
    }
    sort_range(data, stepper, 0, data.len() - 1)
}

fn sort_range<T: Element>(
    data: &mut [T],
    stepper: &mut Stepper<'_, T>,
    mut lo: usize,
    mut hi: usize,
) -> Step {
    while lo < hi {
        let p = partition(data, stepper, lo, hi)?;
        stepper.mark_sorted(p);
        if p - lo < hi - p {
            if p > lo {
                sort_range(data, stepper, lo, p - 1)?;
            }
            lo = p + 1;
        } else {
            sort_range(data, stepper, p + 1, hi)?;
            // p > lo here, otherwise the left side would be the smaller one
            hi = p - 1;
        }
    }
    Ok(())
}

/// Partition `data[lo..=hi]` around `data[hi]` and return the pivot's slot.
pub(crate) fn partition<T: Element>(
    data: &mut [T],
    stepper: &mut Stepper<'_, T>,
    lo: usize,
    hi: usize,
) -> Step<usize> {
    let mut store = lo;
    for j in lo..hi {
        if stepper.compare(data, j, hi)?.is_lt() {
            if store != j {
                stepper.swap(data, store, j)?;
            }
            store += 1;
        }
    }
    if store != hi {
        stepper.swap(data, store, hi)?;
    }
    Ok(store)
}
