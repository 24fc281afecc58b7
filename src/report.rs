//! Step report in Links Notation (Lino)
//!
//! Runs drivers headless (no pause, counting sink) and records how many
//! comparison steps, move steps and array frames each one published for a
//! given input size. All algorithms of one size see the same input.
//!
//! Format:
//!
//! ```text
//! step_report:
//!   timestamp '2026-01-01T00:00:00Z'
//!   description 'default sizes'
//!
//! results:
//!   size_20:
//!     bubble-sort:
//!       comparisons 190
//!       moves 97
//!       frames 288
//!       verified true
//!
//! summary:
//!   size_20:
//!     fewest_comparisons counting-sort
//!     fewest_moves selection-sort
//! ```
//!
//! The `summary` section is derived data and ignored by the parser.

use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::algorithm::{Algorithm, RunOutcome};
use crate::control::RunControl;
use crate::element::is_sorted;
use crate::error::EngineError;
use crate::pacing::{NoDelay, Speed};
use crate::sink::{CountingSink, NullSink};
use crate::step::Stepper;

/// Bogo sort is skipped above this size.
pub const BOGO_MAX_SIZE: usize = 8;

/// Inputs are drawn from `1..=REPORT_MAX_VALUE`.
pub const REPORT_MAX_VALUE: u32 = 1000;

pub const DEFAULT_SIZES: [usize; 4] = [8, 32, 128, 512];

/// Step counts of one algorithm at one input size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub algorithm: Algorithm,
    pub array_size: usize,
    pub comparisons: u64,
    pub moves: u64,
    pub frames: u64,
    /// The run completed and its final array was sorted.
    pub verified: bool,
}

#[derive(Debug, Clone)]
pub struct StepReport {
    /// ISO 8601, UTC, second precision.
    pub timestamp: String,
    pub description: String,
    pub results: Vec<StepResult>,
}

impl StepReport {
    pub fn new(description: &str) -> Self {
        StepReport {
            timestamp: utc_timestamp(),
            description: description.to_string(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: StepResult) {
        self.results.push(result);
    }

    /// Measure every `(algorithm, size)` pair in parallel.
    ///
    /// Results come back ordered by size, then by the order of `algorithms`.
    pub fn measure(description: &str, algorithms: &[Algorithm], sizes: &[usize], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let inputs: Vec<(usize, Vec<u32>)> = sizes
            .iter()
            .map(|&size| {
                let data = (0..size)
                    .map(|_| rng.gen_range(1..=REPORT_MAX_VALUE))
                    .collect();
                (size, data)
            })
            .collect();

        let jobs: Vec<(Algorithm, &[u32])> = inputs
            .iter()
            .flat_map(|(size, data)| {
                algorithms
                    .iter()
                    .filter(move |&&a| a != Algorithm::Bogo || *size <= BOGO_MAX_SIZE)
                    .map(move |&a| (a, data.as_slice()))
            })
            .collect();

        let results = jobs
            .par_iter()
            .map(|&(algorithm, input)| measure_one(algorithm, input))
            .collect();

        let mut report = StepReport::new(description);
        report.results = results;
        report
    }

    fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    fn algorithms(&self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|a| self.results.iter().any(|r| r.algorithm == *a))
            .collect()
    }

    fn find(&self, algorithm: Algorithm, size: usize) -> Option<&StepResult> {
        self.results
            .iter()
            .find(|r| r.algorithm == algorithm && r.array_size == size)
    }

    pub fn to_lino(&self) -> String {
        let mut out = String::new();
        self.write_lino(&mut out)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_lino(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "step_report:")?;
        writeln!(out, "  timestamp '{}'", self.timestamp)?;
        writeln!(out, "  description '{}'", escape_lino_string(&self.description))?;

        let sizes = self.sizes();

        writeln!(out)?;
        writeln!(out, "results:")?;
        for &size in &sizes {
            writeln!(out, "  size_{}:", size)?;
            for result in self.results.iter().filter(|r| r.array_size == size) {
                writeln!(out, "    {}:", result.algorithm.slug())?;
                writeln!(out, "      comparisons {}", result.comparisons)?;
                writeln!(out, "      moves {}", result.moves)?;
                writeln!(out, "      frames {}", result.frames)?;
                writeln!(out, "      verified {}", result.verified)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "summary:")?;
        for &size in &sizes {
            let of_size = || self.results.iter().filter(move |r| r.array_size == size);
            writeln!(out, "  size_{}:", size)?;
            if let Some(best) = of_size().min_by_key(|r| r.comparisons) {
                writeln!(out, "    fewest_comparisons {}", best.algorithm.slug())?;
            }
            if let Some(best) = of_size().min_by_key(|r| r.moves) {
                writeln!(out, "    fewest_moves {}", best.algorithm.slug())?;
            }
        }
        Ok(())
    }

    pub fn save_lino(&self, path: &Path) -> Result<(), EngineError> {
        fs::write(path, self.to_lino())?;
        Ok(())
    }

    /// Markdown with one table per metric: algorithms as rows, sizes as columns.
    pub fn to_markdown_table(&self) -> String {
        let mut out = String::new();
        self.write_markdown(&mut out)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_markdown(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "# Sorting Step Report")?;
        writeln!(out)?;
        writeln!(out, "**Timestamp:** {}", self.timestamp)?;
        writeln!(out, "**Description:** {}", self.description)?;
        writeln!(out)?;

        let sizes = self.sizes();
        let algorithms = self.algorithms();

        let metrics: [(&str, fn(&StepResult) -> u64); 3] = [
            ("Comparisons", |r| r.comparisons),
            ("Moves", |r| r.moves),
            ("Frames", |r| r.frames),
        ];
        for (title, metric) in metrics {
            writeln!(out, "## {}", title)?;
            writeln!(out)?;
            write!(out, "| Algorithm |")?;
            for &size in &sizes {
                write!(out, " {} |", format_size(size))?;
            }
            writeln!(out)?;
            write!(out, "|-----------|")?;
            for _ in &sizes {
                write!(out, "------|")?;
            }
            writeln!(out)?;

            for &algorithm in &algorithms {
                write!(out, "| {} |", algorithm.info().name)?;
                for &size in &sizes {
                    match self.find(algorithm, size) {
                        Some(r) if r.verified => write!(out, " {} |", metric(r))?,
                        Some(r) => write!(out, " {} (unverified) |", metric(r))?,
                        None => write!(out, " N/A |")?,
                    }
                }
                writeln!(out)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "---")?;
        writeln!(out, "*Report generated by sortviz*")?;
        Ok(())
    }

    pub fn save_markdown(&self, path: &Path) -> Result<(), EngineError> {
        fs::write(path, self.to_markdown_table())?;
        Ok(())
    }
}

/// Run `algorithm` headless over a copy of `input` and count its steps.
pub fn measure_one(algorithm: Algorithm, input: &[u32]) -> StepResult {
    let sink = CountingSink::new(NullSink);
    let speed = Speed::from_millis(0);
    let control = RunControl::new();
    let mut data = input.to_vec();

    let outcome = {
        let mut stepper: Stepper<'_, u32> = Stepper::new(&sink, &NoDelay, &speed, &control);
        algorithm.run(&mut data, &mut stepper)
    };
    let stats = sink.stats();
    tracing::debug!(
        algorithm = algorithm.slug(),
        size = input.len(),
        comparisons = stats.comparisons,
        moves = stats.moves,
        "measured"
    );

    StepResult {
        algorithm,
        array_size: input.len(),
        comparisons: stats.comparisons,
        moves: stats.moves,
        frames: stats.frames,
        verified: outcome == RunOutcome::Completed && is_sorted(&data),
    }
}

/// Parse a report written by [`StepReport::to_lino`].
pub fn parse_lino_report(content: &str) -> Result<StepReport, EngineError> {
    let mut report = StepReport {
        timestamp: String::new(),
        description: String::new(),
        results: Vec::new(),
    };
    let mut in_results = false;
    let mut current_size: Option<usize> = None;
    let mut current: Option<StepResult> = None;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let err = |reason: String| EngineError::ReportParse {
            line: line_no,
            reason,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            "step_report:" => continue,
            "results:" => {
                in_results = true;
                continue;
            }
            "summary:" => {
                report.results.extend(current.take());
                in_results = false;
                current_size = None;
                continue;
            }
            _ => {}
        }

        if !in_results {
            if trimmed.starts_with("timestamp ") {
                report.timestamp = extract_quoted_value(trimmed, "timestamp")
                    .ok_or_else(|| err("timestamp is not quoted".to_string()))?;
            } else if trimmed.starts_with("description ") {
                report.description = extract_quoted_value(trimmed, "description")
                    .ok_or_else(|| err("description is not quoted".to_string()))?;
            }
            continue;
        }

        if let Some(header) = trimmed.strip_suffix(':') {
            report.results.extend(current.take());
            if let Some(size) = header.strip_prefix("size_") {
                current_size = Some(
                    size.parse()
                        .map_err(|_| err(format!("bad size '{}'", size)))?,
                );
            } else {
                let array_size =
                    current_size.ok_or_else(|| err("algorithm outside a size block".to_string()))?;
                let algorithm: Algorithm = header
                    .parse()
                    .map_err(|e: EngineError| err(e.to_string()))?;
                current = Some(StepResult {
                    algorithm,
                    array_size,
                    comparisons: 0,
                    moves: 0,
                    frames: 0,
                    verified: false,
                });
            }
            continue;
        }

        let result = current
            .as_mut()
            .ok_or_else(|| err(format!("property outside an algorithm block: '{}'", trimmed)))?;
        let (key, value) = trimmed
            .split_once(' ')
            .ok_or_else(|| err(format!("expected 'key value', got '{}'", trimmed)))?;
        let count = || {
            value
                .parse::<u64>()
                .map_err(|_| err(format!("bad {} '{}'", key, value)))
        };
        match key {
            "comparisons" => result.comparisons = count()?,
            "moves" => result.moves = count()?,
            "frames" => result.frames = count()?,
            "verified" => {
                result.verified = value
                    .parse()
                    .map_err(|_| err(format!("bad verified '{}'", value)))?
            }
            other => return Err(err(format!("unknown property '{}'", other))),
        }
    }
    report.results.extend(current);

    if report.results.is_empty() {
        return Err(EngineError::ReportParse {
            line: content.lines().count(),
            reason: "report contains no results".to_string(),
        });
    }
    Ok(report)
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

fn extract_quoted_value(line: &str, prefix: &str) -> Option<String> {
    let rest = line.strip_prefix(prefix)?.trim();
    let inner = rest.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("\\'", "'"))
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

fn utc_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let time_of_day = secs % 86_400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Proleptic Gregorian date for a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
