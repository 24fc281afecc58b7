//! Session runner
//!
//! A [`SortSession`] owns one run: its array, a fresh run-control token and
//! the live [`Speed`]. The driver executes on a dedicated named thread, so
//! the caller stays free to consume frames, change the speed or stop the run.
//!
//! Dropping a session stops its driver. The thread is not joined on drop; it
//! exits at its next step, which is at most one pause away.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::algorithm::{Algorithm, RunOutcome};
use crate::control::RunControl;
use crate::element::Element;
use crate::error::EngineError;
use crate::pacing::{Delay, Speed};
use crate::sink::VisualSink;
use crate::step::Stepper;

/// What a finished session hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult<T> {
    /// The array as the driver left it: sorted when completed, the last
    /// published frame when cancelled.
    pub data: Vec<T>,
    /// Whether the run completed or was stopped.
    pub outcome: RunOutcome,
}

/// Handle to one driver running on its own thread.
pub struct SortSession<T> {
    algorithm: Algorithm,
    control: RunControl,
    speed: Speed,
    handle: Option<JoinHandle<SessionResult<T>>>,
}

impl<T: Element> SortSession<T> {
    /// Spawn `algorithm` over `data` on a thread named `sort-<slug>`.
    pub fn start(
        algorithm: Algorithm,
        data: Vec<T>,
        sink: Arc<dyn VisualSink<T>>,
        delay: Arc<dyn Delay>,
        speed: Speed,
    ) -> Result<Self, EngineError> {
        let control = RunControl::new();
        let thread_control = control.clone();
        let thread_speed = speed.clone();

        let handle = thread::Builder::new()
            .name(format!("sort-{}", algorithm.slug()))
            .spawn(move || {
                let mut data = data;
                let mut stepper =
                    Stepper::new(sink.as_ref(), delay.as_ref(), &thread_speed, &thread_control);
                let outcome = algorithm.run(&mut data, &mut stepper);
                SessionResult { data, outcome }
            })?;

        tracing::debug!(algorithm = algorithm.slug(), "session started");
        Ok(SortSession {
            algorithm,
            control,
            speed,
            handle: Some(handle),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Ask the driver to stop. It publishes nothing after its next token check.
    pub fn stop(&self) {
        self.control.stop();
    }

    /// Handle to the live speed; `set` takes effect on the driver's next step.
    pub fn speed(&self) -> &Speed {
        &self.speed
    }

    /// A clone of this session's run-control token.
    pub fn control(&self) -> RunControl {
        self.control.clone()
    }

    /// True once the driver thread has returned, completed or cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the driver thread and return the final array and outcome.
    pub fn join(mut self) -> Result<SessionResult<T>, EngineError> {
        let Some(handle) = self.handle.take() else {
            unreachable!("session handle is only taken by join");
        };
        let result = handle.join().map_err(|_| EngineError::DriverPanicked {
            algorithm: self.algorithm.slug(),
        })?;
        tracing::debug!(
            algorithm = self.algorithm.slug(),
            outcome = ?result.outcome,
            "session joined"
        );
        Ok(result)
    }
}

impl<T> Drop for SortSession<T> {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.control.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::is_sorted;
    use crate::pacing::{NoDelay, SleepDelay};
    use crate::sink::{ChannelSink, Frame, NullSink, RecordingSink};
    use rand::Rng;
    use std::time::{Duration, Instant};

    #[test]
    fn test_session_completes() {
        let mut rng = rand::thread_rng();
        let data: Vec<u32> = (0..200).map(|_| rng.gen_range(1..=100)).collect();
        let sink = Arc::new(RecordingSink::<u32>::new());

        let session = SortSession::start(
            Algorithm::Quick,
            data,
            sink.clone(),
            Arc::new(NoDelay),
            Speed::from_millis(0),
        )
        .unwrap();
        while !session.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }
        let result = session.join().unwrap();

        assert_eq!(result.outcome, RunOutcome::Completed);
        assert!(is_sorted(&result.data));
        assert_eq!(sink.last_array(), Some(result.data.clone()));
        assert!(sink.last_highlights().unwrap().is_complete(200));
    }

    #[test]
    fn test_stop_cancels_promptly() {
        let data: Vec<u32> = (0..10).rev().collect();
        let session = SortSession::start(
            Algorithm::Bogo,
            data,
            Arc::new(NullSink),
            Arc::new(SleepDelay),
            Speed::from_millis(10),
        )
        .unwrap();

        thread::sleep(Duration::from_millis(50));
        let stopped_at = Instant::now();
        session.stop();
        let result = session.join().unwrap();

        assert_eq!(result.outcome, RunOutcome::Cancelled);
        assert!(stopped_at.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_live_speed_change() {
        let data: Vec<u32> = (0..30).rev().collect();
        let session = SortSession::start(
            Algorithm::Bubble,
            data,
            Arc::new(NullSink),
            Arc::new(SleepDelay),
            Speed::from_millis(500),
        )
        .unwrap();

        // 435 compares plus 435 swaps at 500 ms would take minutes
        session.speed().set(Duration::ZERO);
        let started = Instant::now();
        let result = session.join().unwrap();
        assert_eq!(result.outcome, RunOutcome::Completed);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_drop_stops_driver() {
        let session = SortSession::start(
            Algorithm::Bogo,
            (0..12u32).rev().collect(),
            Arc::new(NullSink),
            Arc::new(SleepDelay),
            Speed::from_millis(10),
        )
        .unwrap();
        let control = session.control();
        drop(session);
        assert!(!control.is_running());
    }

    #[test]
    fn test_channel_sink_receives_frames_in_order() {
        let (sink, rx) = ChannelSink::<u32>::new();
        let session = SortSession::start(
            Algorithm::Selection,
            vec![3u32, 1, 2],
            Arc::new(sink),
            Arc::new(NoDelay),
            Speed::from_millis(0),
        )
        .unwrap();
        let result = session.join().unwrap();
        assert_eq!(result.data, vec![1, 2, 3]);

        let frames: Vec<Frame<u32>> = rx.iter().collect();
        assert!(matches!(frames.first(), Some(Frame::Highlights(_))));
        assert_eq!(frames.last(), Some(&Frame::Array(vec![1, 2, 3])));
        // highlights and arrays alternate
        for pair in frames.chunks(2) {
            assert!(matches!(pair, [Frame::Highlights(_), Frame::Array(_)]));
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Volatile(u32);

    impl PartialOrd for Volatile {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Volatile {
        fn cmp(&self, _other: &Self) -> std::cmp::Ordering {
            panic!("comparison failed");
        }
    }

    impl Element for Volatile {
        fn key(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_panicking_driver_reported() {
        let session = SortSession::start(
            Algorithm::Bubble,
            vec![Volatile(2), Volatile(1)],
            Arc::new(NullSink),
            Arc::new(NoDelay),
            Speed::from_millis(0),
        )
        .unwrap();
        let err = session.join().unwrap_err();
        assert!(matches!(
            err,
            EngineError::DriverPanicked {
                algorithm: "bubble-sort"
            }
        ));
    }
}
