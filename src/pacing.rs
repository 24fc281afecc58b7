//! Pacing: the delay primitive and the live speed setting.
//!
//! Every visible step of a driver ends with exactly one call to
//! [`Delay::pause`] using the current [`Speed`]. The delay itself knows nothing
//! about cancellation; the step helper checks the run-control token around it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default step interval, matching the web visualizer's initial slider value.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(50);

/// Suspends the calling driver for roughly the given duration.
pub trait Delay: Send + Sync {
    fn pause(&self, duration: Duration);
}

/// Blocks the current thread with [`thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepDelay;

impl Delay for SleepDelay {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Returns immediately. Used for headless runs (reports, benchmarks, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Delay for NoDelay {
    #[inline]
    fn pause(&self, _duration: Duration) {}
}

/// Step interval shared between the orchestrator and a running driver.
///
/// The driver re-reads it before every pause, so a change made mid-run takes
/// effect on the next step. Stored as whole milliseconds.
#[derive(Debug, Clone)]
pub struct Speed {
    millis: Arc<AtomicU64>,
}

impl Speed {
    pub fn new(interval: Duration) -> Self {
        Speed {
            millis: Arc::new(AtomicU64::new(interval.as_millis() as u64)),
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Current interval. Read by the stepper before every pause.
    #[inline]
    pub fn get(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::Relaxed))
    }

    /// Change the interval for every later step of the run.
    pub fn set(&self, interval: Duration) {
        self.millis
            .store(interval.as_millis() as u64, Ordering::Relaxed);
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}
