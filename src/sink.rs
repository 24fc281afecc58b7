//! Visualization sinks
//!
//! A sink is the observer side of a run. Drivers (through the step helper)
//! publish two kinds of frames:
//!
//! - an owned copy of the array after the step, and
//! - the three highlight sets as one [`Highlights`] value, so an observer can
//!   never see `comparing` updated without `swapping`.
//!
//! Sinks provided here:
//!
//! - [`NullSink`]: discards everything (benchmarks)
//! - [`RecordingSink`]: keeps the ordered frame log (tests, replays)
//! - [`ChannelSink`]: forwards frames to another thread
//! - [`CountingSink`]: counts comparisons and moves, then forwards to an inner sink

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

/// Index sets describing what the driver is doing right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub sorted: Vec<usize>,
}

impl Highlights {
    /// True when `sorted` covers `0..len` and nothing else is highlighted.
    pub fn is_complete(&self, len: usize) -> bool {
        self.comparing.is_empty()
            && self.swapping.is_empty()
            && self.sorted.len() == len
            && self.sorted.iter().enumerate().all(|(i, &s)| i == s)
    }
}

/// One published frame, in publication order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame<T> {
    Array(Vec<T>),
    Highlights(Highlights),
}

/// Observer of a run. Receives the highlights of a step, then its array.
pub trait VisualSink<T>: Send + Sync {
    fn publish_array(&self, snapshot: Vec<T>);
    fn publish_highlights(&self, highlights: Highlights);
}

impl<T, S: VisualSink<T> + ?Sized> VisualSink<T> for Arc<S> {
    fn publish_array(&self, snapshot: Vec<T>) {
        (**self).publish_array(snapshot)
    }

    fn publish_highlights(&self, highlights: Highlights) {
        (**self).publish_highlights(highlights)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl<T> VisualSink<T> for NullSink {
    #[inline]
    fn publish_array(&self, _snapshot: Vec<T>) {}

    #[inline]
    fn publish_highlights(&self, _highlights: Highlights) {}
}

/// Records every frame in order.
#[derive(Debug)]
pub struct RecordingSink<T> {
    frames: Mutex<Vec<Frame<T>>>,
}

impl<T: Clone> RecordingSink<T> {
    pub fn new() -> Self {
        RecordingSink {
            frames: Mutex::new(Vec::new()),
        }
    }

    pub fn frames(&self) -> Vec<Frame<T>> {
        self.frames.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }

    pub fn last_array(&self) -> Option<Vec<T>> {
        self.frames.lock().iter().rev().find_map(|f| match f {
            Frame::Array(a) => Some(a.clone()),
            Frame::Highlights(_) => None,
        })
    }

    pub fn last_highlights(&self) -> Option<Highlights> {
        self.frames.lock().iter().rev().find_map(|f| match f {
            Frame::Highlights(h) => Some(h.clone()),
            Frame::Array(_) => None,
        })
    }

    /// All published highlight frames, in order.
    pub fn highlights(&self) -> Vec<Highlights> {
        self.frames
            .lock()
            .iter()
            .filter_map(|f| match f {
                Frame::Highlights(h) => Some(h.clone()),
                Frame::Array(_) => None,
            })
            .collect()
    }

    /// Highlight frames that announced a comparison.
    pub fn comparisons(&self) -> usize {
        self.highlights()
            .iter()
            .filter(|h| !h.comparing.is_empty())
            .count()
    }

    /// Highlight frames that announced a data movement.
    pub fn moves(&self) -> usize {
        self.highlights()
            .iter()
            .filter(|h| !h.swapping.is_empty())
            .count()
    }
}

impl<T: Clone> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> VisualSink<T> for RecordingSink<T> {
    fn publish_array(&self, snapshot: Vec<T>) {
        self.frames.lock().push(Frame::Array(snapshot));
    }

    fn publish_highlights(&self, highlights: Highlights) {
        self.frames.lock().push(Frame::Highlights(highlights));
    }
}

/// Forwards frames over an unbounded channel.
///
/// If the receiving side has gone away the frame is dropped; a vanished
/// observer never stops the driver, only the run-control token does.
#[derive(Debug, Clone)]
pub struct ChannelSink<T> {
    tx: Sender<Frame<T>>,
}

impl<T> ChannelSink<T> {
    pub fn new() -> (Self, Receiver<Frame<T>>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (ChannelSink { tx }, rx)
    }
}

impl<T: Send> VisualSink<T> for ChannelSink<T> {
    fn publish_array(&self, snapshot: Vec<T>) {
        if self.tx.send(Frame::Array(snapshot)).is_err() {
            tracing::trace!("frame receiver dropped");
        }
    }

    fn publish_highlights(&self, highlights: Highlights) {
        if self.tx.send(Frame::Highlights(highlights)).is_err() {
            tracing::trace!("frame receiver dropped");
        }
    }
}

/// Totals gathered by a [`CountingSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub comparisons: u64,
    pub moves: u64,
    pub frames: u64,
}

/// Counts comparison and move steps before handing frames to `inner`.
#[derive(Debug, Default)]
pub struct CountingSink<S> {
    inner: S,
    comparisons: AtomicU64,
    moves: AtomicU64,
    frames: AtomicU64,
}

impl<S> CountingSink<S> {
    pub fn new(inner: S) -> Self {
        CountingSink {
            inner,
            comparisons: AtomicU64::new(0),
            moves: AtomicU64::new(0),
            frames: AtomicU64::new(0),
        }
    }

    pub fn stats(&self) -> StepStats {
        StepStats {
            comparisons: self.comparisons.load(Ordering::Relaxed),
            moves: self.moves.load(Ordering::Relaxed),
            frames: self.frames.load(Ordering::Relaxed),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<T, S: VisualSink<T>> VisualSink<T> for CountingSink<S> {
    fn publish_array(&self, snapshot: Vec<T>) {
        self.frames.fetch_add(1, Ordering::Relaxed);
        self.inner.publish_array(snapshot);
    }

    fn publish_highlights(&self, highlights: Highlights) {
        if !highlights.comparing.is_empty() {
            self.comparisons.fetch_add(1, Ordering::Relaxed);
        }
        if !highlights.swapping.is_empty() {
            self.moves.fetch_add(1, Ordering::Relaxed);
        }
        self.inner.publish_highlights(highlights);
    }
}
