// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use std::io::{self, BufWriter, Write};
use tracing::info;

use crate::core::input::open_input;
use crate::core::processor::process_lines;
use crate::models::{InputSource, ProcessStats};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calculate GC content", long_about = None)]
pub struct Args {
    /// Input sequence file ("-" reads from stdin)
    #[arg(value_name = "FILE")]
    pub file: InputSource,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the GC report for `args`, writing results to stdout.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or if stdout
/// cannot be written.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(&args, BufWriter::new(stdout.lock()))?;
    Ok(())
}

/// Same as [`run`] but writes the report to `out`.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or if `out`
/// cannot be written.
#[inline]
pub fn run_with_output<W: Write>(args: &Args, out: W) -> Result<ProcessStats> {
    let reader = open_input(&args.file)
        .with_context(|| format!("Cannot process sequences from {}", args.file))?;
    let stats = process_lines(reader, out)
        .with_context(|| format!("Failed to process sequences from {}", args.file))?;

    info!(
        "Processed {} lines from {}: {} sequences, {} blank",
        stats.lines_read, args.file, stats.sequences, stats.skipped_blank
    );
    Ok(stats)
}
