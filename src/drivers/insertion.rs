//! Insertion sort
//!
//! The held key is compared against its left neighbours; larger neighbours
//! are shifted one slot right and the key is written into the gap. The shift
//! frames briefly show the shifted value twice, exactly as the textbook
//! algorithm leaves the array between moves.

use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    if data.is_empty() {
        return Ok(());
    }
    sort_range(data, stepper, 0, data.len() - 1)
}

/// Insertion sort of `data[lo..=hi]`.
///
/// Shared with tim sort (fixed runs) and intro sort (small partitions).
pub(crate) fn sort_range<T: Element>(
    data: &mut [T],
    stepper: &mut Stepper<'_, T>,
    lo: usize,
    hi: usize,
) -> Step {
    for i in lo + 1..=hi {
        let key = data[i];
        let mut j = i;
        while j > lo {
            stepper.inspect(data, &[j - 1, j])?;
            if data[j - 1] <= key {
                break;
            }
            stepper.shift(data, j - 1, j)?;
            j -= 1;
        }
        if j != i {
            stepper.write(data, j, key)?;
        }
    }
    Ok(())
}
