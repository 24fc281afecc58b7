//! Error type for the fallible edges of the engine.
//!
//! Drivers themselves never fail: cancellation is reported through
//! [`RunOutcome`](crate::RunOutcome). Errors only arise around them, when
//! looking up an algorithm, validating configuration, joining a session
//! thread or reading a saved report.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("driver thread for {algorithm} panicked")]
    DriverPanicked { algorithm: &'static str },

    #[error("report line {line}: {reason}")]
    ReportParse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
