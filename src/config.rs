//! Visualizer configuration: array shape and step interval.

use std::time::Duration;

use rand::Rng;

use crate::error::EngineError;
use crate::pacing::DEFAULT_SPEED;

pub const DEFAULT_LEN: usize = 20;
pub const DEFAULT_MIN_VALUE: u32 = 1;
pub const DEFAULT_MAX_VALUE: u32 = 100;

/// Fastest accepted step interval.
pub const MIN_SPEED: Duration = Duration::from_millis(10);
/// Slowest accepted step interval.
pub const MAX_SPEED: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Number of values in a generated array.
    pub len: usize,
    /// Smallest generated value, inclusive.
    pub min_value: u32,
    /// Largest generated value, inclusive.
    pub max_value: u32,
    /// Pause after each visible step.
    pub speed: Duration,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            len: DEFAULT_LEN,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            speed: DEFAULT_SPEED,
        }
    }
}

impl VisualizerConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_value > self.max_value {
            return Err(EngineError::InvalidConfig(format!(
                "min value {} is greater than max value {}",
                self.min_value, self.max_value
            )));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(EngineError::InvalidConfig(format!(
                "speed {} ms is outside {}..={} ms",
                self.speed.as_millis(),
                MIN_SPEED.as_millis(),
                MAX_SPEED.as_millis()
            )));
        }
        Ok(())
    }

    /// A fresh array of `len` uniform values in `min_value..=max_value`.
    pub fn random_array(&self) -> Result<Vec<u32>, EngineError> {
        self.random_array_with(&mut rand::thread_rng())
    }

    pub fn random_array_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<u32>, EngineError> {
        self.validate()?;
        Ok((0..self.len)
            .map(|_| rng.gen_range(self.min_value..=self.max_value))
            .collect())
    }
}
