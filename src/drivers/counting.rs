//! Counting sort
//!
//! Four phases, as in the textbook version:
//!
//! 1. scan for the maximum key
//! 2. histogram of keys over `0..=max`
//! 3. prefix sums, then a right-to-left pass placing each element in an
//!    output buffer (this is what keeps equal keys in input order)
//! 4. write the buffer back, marking each slot sorted as it lands
//!
//! Phases 1-3 highlight the element being read; only phase 4 moves data.
//! The histogram holds `max + 1` counters, so keys are expected to be small.
//! [`Algorithm::check_input`](crate::Algorithm::check_input) refuses keys
//! above [`MAX_KEY`].

use crate::element::Element;
use crate::step::{Step, Stepper};

/// Largest key accepted by `Algorithm::check_input` for counting sort.
pub const MAX_KEY: u32 = 1 << 20;

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let n = data.len();
    if n == 0 {
        return Ok(());
    }

    let max = scan_max(data, stepper)? as usize;
    let mut count = vec![0usize; max + 1];
    for i in 0..n {
        stepper.inspect(data, &[i])?;
        count[data[i].key() as usize] += 1;
    }

    for k in 1..count.len() {
        count[k] += count[k - 1];
    }
    stepper.checkpoint()?;

    let mut output = data.to_vec();
    for i in (0..n).rev() {
        stepper.inspect(data, &[i])?;
        let slot = &mut count[data[i].key() as usize];
        *slot -= 1;
        output[*slot] = data[i];
    }

    for (i, value) in output.into_iter().enumerate() {
        stepper.mark_sorted(i);
        stepper.write(data, i, value)?;
    }
    Ok(())
}

/// Largest key in a non-empty slice, highlighting each element read.
///
/// First phase of counting, radix and bucket sort.
pub(crate) fn scan_max<T: Element>(data: &[T], stepper: &mut Stepper<'_, T>) -> Step<u32> {
    let mut max = data[0].key();
    for i in 1..data.len() {
        stepper.inspect(data, &[i])?;
        max = max.max(data[i].key());
    }
    Ok(max)
}
