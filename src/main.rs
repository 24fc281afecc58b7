//! sortviz command-line front end
//!
//! - `list` prints the algorithm catalog
//! - `run` animates one algorithm on a worker thread and logs every frame
//! - `search` animates a linear or binary search the same way
//! - `report` counts headless steps per algorithm and size (Links Notation
//!   and markdown output)
//!
//! Log verbosity follows `RUST_LOG` (default `info`; `debug` adds array
//! snapshots).

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use crossbeam_channel::RecvTimeoutError;
use rand::seq::SliceRandom;
use sortviz::config::{DEFAULT_LEN, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};
use sortviz::report::DEFAULT_SIZES;
use sortviz::{
    Algorithm, ChannelSink, Frame, RunControl, RunOutcome, Search, SearchOutcome, SleepDelay,
    SortSession, Speed, StepReport, Stepper, VisualizerConfig,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through sorting algorithms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every algorithm with its complexity and stability.
    List,
    /// Animate one algorithm, logging each step.
    Run {
        /// Algorithm slug or short name (e.g. `quick-sort`, `heap`).
        algorithm: Algorithm,
        /// Explicit input, comma separated. A random array is used otherwise.
        #[arg(long, value_delimiter = ',')]
        values: Vec<u32>,
        /// Length of the random array.
        #[arg(long, default_value_t = DEFAULT_LEN)]
        len: usize,
        /// Smallest random value.
        #[arg(long, default_value_t = DEFAULT_MIN_VALUE)]
        min: u32,
        /// Largest random value.
        #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
        max: u32,
        /// Pause after each step, in milliseconds (10..=500).
        #[arg(long, default_value_t = 50)]
        speed_ms: u64,
        /// Stop the run after this many milliseconds.
        #[arg(long)]
        stop_after_ms: Option<u64>,
    },
    /// Animate a search, logging each index it reads.
    Search {
        /// `linear-search` or `binary-search` (short names accepted).
        algorithm: Search,
        /// Value to look for. A random element of the input otherwise.
        #[arg(long)]
        target: Option<u32>,
        /// Explicit input, comma separated. A random array is used otherwise,
        /// sorted for binary search.
        #[arg(long, value_delimiter = ',')]
        values: Vec<u32>,
        /// Length of the random array.
        #[arg(long, default_value_t = DEFAULT_LEN)]
        len: usize,
        /// Smallest random value.
        #[arg(long, default_value_t = DEFAULT_MIN_VALUE)]
        min: u32,
        /// Largest random value.
        #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
        max: u32,
        /// Pause after each read, in milliseconds (10..=500).
        #[arg(long, default_value_t = 50)]
        speed_ms: u64,
    },
    /// Count comparison and move steps for a set of input sizes.
    Report {
        /// Input sizes, comma separated.
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,
        /// Algorithms to include, comma separated. All by default.
        #[arg(long, value_delimiter = ',')]
        algorithms: Vec<Algorithm>,
        /// Seed for the generated inputs.
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Free-form description stored in the report.
        #[arg(long, default_value = "sortviz step report")]
        description: String,
        /// Write the Links Notation report here.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Write markdown here instead of printing it.
        #[arg(long, value_name = "FILE")]
        markdown: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Run {
            algorithm,
            values,
            len,
            min,
            max,
            speed_ms,
            stop_after_ms,
        } => {
            let config = VisualizerConfig {
                len,
                min_value: min,
                max_value: max,
                speed: Duration::from_millis(speed_ms),
            };
            run(
                algorithm,
                config,
                values,
                stop_after_ms.map(Duration::from_millis),
            )
        }
        Command::Search {
            algorithm,
            target,
            values,
            len,
            min,
            max,
            speed_ms,
        } => {
            let config = VisualizerConfig {
                len,
                min_value: min,
                max_value: max,
                speed: Duration::from_millis(speed_ms),
            };
            search(algorithm, config, values, target)
        }
        Command::Report {
            sizes,
            algorithms,
            seed,
            description,
            output,
            markdown,
        } => report(&sizes, algorithms, seed, &description, output, markdown),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(env_filter).with_target(false).try_init();
}

fn list() {
    println!(
        "{:<16} {:<12} {:<14} {:<14} {:<9} {}",
        "SLUG", "BEST", "AVERAGE", "WORST", "SPACE", "STABLE"
    );
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        println!(
            "{:<16} {:<12} {:<14} {:<14} {:<9} {}",
            algorithm.slug(),
            info.time.best,
            info.time.average,
            info.time.worst,
            info.space,
            if info.stable { "yes" } else { "no" }
        );
    }
    for search in Search::ALL {
        let time = search.time();
        println!(
            "{:<16} {:<12} {:<14} {:<14} {:<9} -",
            search.slug(),
            time.best,
            time.average,
            time.worst,
            "O(1)"
        );
    }
}

fn run(
    algorithm: Algorithm,
    config: VisualizerConfig,
    values: Vec<u32>,
    stop_after: Option<Duration>,
) -> Result<()> {
    config.validate().context("invalid run settings")?;
    let data = if values.is_empty() {
        config.random_array()?
    } else {
        values
    };

    algorithm
        .check_input(&data)
        .context("input not accepted")?;

    println!("{} ({} values)", algorithm.info().name, data.len());
    println!("Input:  {:?}", data);

    let (sink, rx) = ChannelSink::<u32>::new();
    let session = SortSession::start(
        algorithm,
        data,
        Arc::new(sink),
        Arc::new(SleepDelay),
        Speed::new(config.speed),
    )
    .context("failed to start driver thread")?;

    let mut deadline = stop_after.map(|d| Instant::now() + d);
    let mut steps = 0u64;
    loop {
        let frame = match deadline {
            Some(at) => rx.recv_deadline(at),
            None => rx.recv().map_err(RecvTimeoutError::from),
        };
        match frame {
            Ok(Frame::Highlights(h)) => {
                steps += 1;
                tracing::info!(
                    step = steps,
                    comparing = ?h.comparing,
                    swapping = ?h.swapping,
                    sorted = h.sorted.len(),
                    "step"
                );
            }
            Ok(Frame::Array(snapshot)) => tracing::debug!(array = ?snapshot, "frame"),
            Err(RecvTimeoutError::Timeout) => {
                tracing::info!(after_steps = steps, "stopping run");
                session.stop();
                deadline = None;
            }
            // driver thread is done and dropped its sink
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let result = session.join()?;
    match result.outcome {
        RunOutcome::Completed => println!("Sorted: {:?}", result.data),
        RunOutcome::Cancelled => println!("Stopped: {:?}", result.data),
    }
    println!("Steps:  {}", steps);
    Ok(())
}

fn search(
    algorithm: Search,
    config: VisualizerConfig,
    values: Vec<u32>,
    target: Option<u32>,
) -> Result<()> {
    config.validate().context("invalid search settings")?;
    let data = if values.is_empty() {
        let mut data = config.random_array()?;
        if algorithm == Search::Binary {
            data.sort_unstable();
        }
        data
    } else {
        values
    };
    algorithm
        .check_input(&data)
        .context("input not accepted")?;
    let target = match target {
        Some(target) => target,
        None => data
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(config.min_value),
    };

    println!("{} for {} in {} values", algorithm.name(), target, data.len());
    println!("Input:  {:?}", data);

    let (sink, rx) = ChannelSink::<u32>::new();
    let speed = Speed::new(config.speed);
    let control = RunControl::new();
    let outcome = thread::scope(|scope| {
        let (data, speed, control) = (&data, &speed, &control);
        let driver = thread::Builder::new()
            .name(format!("search-{}", algorithm.slug()))
            .spawn_scoped(scope, move || {
                let mut stepper: Stepper<'_, u32> =
                    Stepper::new(&sink, &SleepDelay, speed, control);
                algorithm.run(data, target, &mut stepper)
            })?;
        for frame in rx.iter() {
            if let Frame::Highlights(h) = frame {
                tracing::info!(index = ?h.comparing, "step");
            }
        }
        driver
            .join()
            .map_err(|_| anyhow!("{} thread panicked", algorithm.slug()))
    })?;

    match outcome {
        SearchOutcome::Found(index) => println!("Found {} at index {}", target, index),
        SearchOutcome::NotFound => println!("{} not found", target),
        SearchOutcome::Cancelled => println!("Search stopped"),
    }
    Ok(())
}

fn report(
    sizes: &[usize],
    algorithms: Vec<Algorithm>,
    seed: u64,
    description: &str,
    output: Option<PathBuf>,
    markdown: Option<PathBuf>,
) -> Result<()> {
    let algorithms = if algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        algorithms
    };

    let started = Instant::now();
    let report = StepReport::measure(description, &algorithms, sizes, seed);
    tracing::info!(
        runs = report.results.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "report measured"
    );

    if let Some(path) = output {
        report
            .save_lino(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Lino report written to: {}", path.display());
    }
    match markdown {
        Some(path) => {
            report
                .save_markdown(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Markdown report written to: {}", path.display());
        }
        None => print!("{}", report.to_markdown_table()),
    }

    let failed: Vec<_> = report
        .results
        .iter()
        .filter(|r| !r.verified)
        .map(|r| format!("{} at size {}", r.algorithm, r.array_size))
        .collect();
    if !failed.is_empty() {
        bail!("unsorted output from {}", failed.join(", "));
    }
    Ok(())
}
