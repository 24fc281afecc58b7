//! Stepwise sorting-algorithm animation engine.
//!
//! Each sorting algorithm is a driver that mutates an array one visible step
//! at a time. Every step publishes the highlight sets and a snapshot of the
//! array to a [`VisualSink`], then pauses for the current [`Speed`]. A shared
//! [`RunControl`] token stops a run at its next step. Linear and binary
//! [`Search`] follow the same contract.
//!
//! ```no_run
//! use sortviz::{Algorithm, NoDelay, RecordingSink, RunControl, Speed, Stepper};
//!
//! let sink = RecordingSink::<u32>::new();
//! let speed = Speed::from_millis(0);
//! let control = RunControl::new();
//! let mut stepper = Stepper::new(&sink, &NoDelay, &speed, &control);
//!
//! let mut data = vec![5u32, 3, 8, 1, 2];
//! Algorithm::Bubble.run(&mut data, &mut stepper);
//! assert_eq!(data, vec![1, 2, 3, 5, 8]);
//! ```

pub mod algorithm;
pub mod config;
pub mod control;
pub mod drivers;
pub mod element;
pub mod error;
pub mod pacing;
pub mod report;
pub mod search;
pub mod session;
pub mod sink;
pub mod step;

pub use algorithm::{Algorithm, AlgorithmInfo, RunOutcome, TimeComplexity};
pub use config::VisualizerConfig;
pub use control::RunControl;
pub use element::{is_sorted, Element};
pub use error::EngineError;
pub use pacing::{Delay, NoDelay, SleepDelay, Speed, DEFAULT_SPEED};
pub use report::{parse_lino_report, StepReport, StepResult};
pub use search::{Search, SearchOutcome};
pub use session::{SessionResult, SortSession};
pub use sink::{
    ChannelSink, CountingSink, Frame, Highlights, NullSink, RecordingSink, StepStats, VisualSink,
};
pub use step::{Cancelled, Step, Stepper};
