//! Radix sort (LSD, base 10)
//!
//! One stable counting pass per decimal digit, least significant first,
//! until the maximum key has no digits left. Each pass reads every element
//! twice (histogram, right-to-left placement) and writes the whole array
//! back. Slots are only marked sorted by the final frame, since an
//! intermediate pass does not settle anything.

use crate::drivers::counting::scan_max;
use crate::element::Element;
use crate::step::{Step, Stepper};

const RADIX: u64 = 10;

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    if data.is_empty() {
        return Ok(());
    }

    let max = u64::from(scan_max(data, stepper)?);
    let mut exp = 1u64;
    while max / exp > 0 {
        digit_pass(data, stepper, exp)?;
        exp *= RADIX;
    }
    Ok(())
}

#[inline]
fn digit<T: Element>(value: &T, exp: u64) -> usize {
    ((u64::from(value.key()) / exp) % RADIX) as usize
}

fn digit_pass<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>, exp: u64) -> Step {
    let n = data.len();
    let mut count = [0usize; RADIX as usize];

    for i in 0..n {
        stepper.inspect(data, &[i])?;
        count[digit(&data[i], exp)] += 1;
    }

    for d in 1..count.len() {
        count[d] += count[d - 1];
    }

    let mut output = data.to_vec();
    for i in (0..n).rev() {
        stepper.inspect(data, &[i])?;
        let slot = &mut count[digit(&data[i], exp)];
        *slot -= 1;
        output[*slot] = data[i];
    }

    for (i, value) in output.into_iter().enumerate() {
        stepper.write(data, i, value)?;
    }
    Ok(())
}
