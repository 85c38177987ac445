// src/core/processor.rs
use std::io::{BufRead, Write};
use tracing::{debug, trace};

use crate::core::gc::analyze_sequence;
use crate::error::{GcError, Result};
use crate::models::ProcessStats;

/// Streams sequence lines from `reader` and writes one GC report line per
/// non-blank input line to `writer`, in input order.
///
/// Lines are read one at a time into a reused buffer, so input of any size
/// is handled in constant memory. Each result is written as soon as it is
/// computed; output already written stays written if a later read fails.
///
/// # Arguments
///
/// * `reader` - Source of raw sequence lines
/// * `writer` - Destination for the formatted `" 28%: GATTACA"` lines
///
/// # Returns
///
/// * `Ok(ProcessStats)` - Counters describing what was read
///
/// # Errors
///
/// This function may return an error if:
/// * Reading from `reader` fails, including on invalid UTF-8
/// * Writing to or flushing `writer` fails
#[inline]
pub fn process_lines<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<ProcessStats> {
    let mut stats = ProcessStats::new();
    let mut line = String::new();

    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .map_err(|source| GcError::Read {
                line: stats.lines_read.saturating_add(1),
                source,
            })?;
        if bytes == 0 {
            break;
        }
        stats.lines_read = stats.lines_read.saturating_add(1);

        if let Some(result) = analyze_sequence(&line) {
            trace!(line = stats.lines_read, pct = result.percentage, "sequence");
            writeln!(writer, "{result}").map_err(|source| GcError::Write { source })?;
            stats.sequences = stats.sequences.saturating_add(1);
        } else {
            debug!("Skipping blank line {}", stats.lines_read);
            stats.skipped_blank = stats.skipped_blank.saturating_add(1);
        }
    }

    writer.flush().map_err(|source| GcError::Write { source })?;
    Ok(stats)
}
