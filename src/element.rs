//! Values the drivers can sort.
//!
//! Comparison drivers only need the total order. Counting, radix and bucket
//! sort additionally need a non-negative integer key; for plain numbers the
//! key is the value itself.

use std::fmt::Debug;

pub trait Element: Copy + Ord + Send + Sync + Debug + 'static {
    /// Non-negative integer key that orders exactly like `Ord`:
    /// `a.cmp(b) == a.key().cmp(&b.key())`.
    fn key(&self) -> u32;
}

impl Element for u32 {
    #[inline]
    fn key(&self) -> u32 {
        *self
    }
}

impl Element for u16 {
    #[inline]
    fn key(&self) -> u32 {
        u32::from(*self)
    }
}

impl Element for u8 {
    #[inline]
    fn key(&self) -> u32 {
        u32::from(*self)
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
