//! Run-control token
//!
//! A single boolean shared between the orchestrator (the only writer) and the
//! active driver (a pure reader). Drivers poll it before every visible step;
//! once it reads `false` they return without publishing anything further.
//!
//! Clones share state, so the orchestrator keeps one clone and hands another to
//! the driver thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag for one run.
#[derive(Debug, Clone)]
pub struct RunControl {
    running: Arc<AtomicBool>,
}

impl RunControl {
    /// Create a token in the running state.
    pub fn new() -> Self {
        RunControl {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a token that is already stopped.
    ///
    /// Mostly useful in tests asserting that a driver never starts.
    pub fn stopped() -> Self {
        RunControl {
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// `false` once any clone has called [`stop`](Self::stop).
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Ask the driver to stop at its next checkpoint. Idempotent.
    #[inline]
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}
