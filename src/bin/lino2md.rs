//! Lino to Markdown Converter
//!
//! Converts a Links Notation step report (as written by `sortviz report
//! --output`) to Markdown.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sortviz::parse_lino_report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a Links Notation step report to Markdown", long_about = None)]
struct Args {
    /// Path to the Links Notation report file.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Optional output path (prints to stdout if not specified).
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let report = parse_lino_report(&content)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    let markdown = report.to_markdown_table();

    match args.output {
        Some(path) => {
            fs::write(&path, &markdown).with_context(|| format!("writing {}", path.display()))?;
            println!("Markdown report written to: {}", path.display());
        }
        None => print!("{}", markdown),
    }
    Ok(())
}
