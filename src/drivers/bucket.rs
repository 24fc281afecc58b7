//! Bucket sort
//!
//! Distributes values into `floor(sqrt(n))` buckets by key range
//! (`key * buckets / (max + 1)`), insertion-sorts each bucket off screen and
//! concatenates the buckets back in order. The distribution reads are
//! highlighted one per step; the per-bucket sorting is not animated, only
//! checked for cancellation between buckets. Slots are marked sorted as the
//! concatenation writes them.

use crate::drivers::counting::scan_max;
use crate::element::Element;
use crate::step::{Step, Stepper};

pub fn sort<T: Element>(data: &mut [T], stepper: &mut Stepper<'_, T>) -> Step {
    let n = data.len();
    if n == 0 {
        return Ok(());
    }

    let max = u64::from(scan_max(data, stepper)?);
    let bucket_count = bucket_count(n);
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];

    for i in 0..n {
        stepper.inspect(data, &[i])?;
        let b = u64::from(data[i].key()) * bucket_count as u64 / (max + 1);
        buckets[b as usize].push(data[i]);
    }

    for bucket in &mut buckets {
        stepper.checkpoint()?;
        insertion_sort(bucket);
    }

    for (k, value) in buckets.into_iter().flatten().enumerate() {
        stepper.mark_sorted(k);
        stepper.write(data, k, value)?;
    }
    Ok(())
}

/// `floor(sqrt(n))`, at least one bucket for any non-empty input.
fn bucket_count(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root.max(1)
}

fn insertion_sort<T: Ord + Copy>(bucket: &mut [T]) {
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut j = i;
        while j > 0 && bucket[j - 1] > key {
            bucket[j] = bucket[j - 1];
            j -= 1;
        }
        bucket[j] = key;
    }
}
