// src/core/gc.rs
use crate::models::GcResult;
use crate::utils::trim_sequence;

/// Counts the characters of `seq` that lowercase to `g` or `c`.
///
/// Anything else, including `N` and non-nucleotide symbols, contributes
/// nothing.
#[inline]
#[must_use]
pub fn count_gc(seq: &str) -> usize {
    seq.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| c == 'g' || c == 'c')
        .count()
}

/// Integer GC percentage, truncated toward zero (2 of 7 is 28, not 29).
///
/// # Arguments
///
/// * `gc` - Number of G/C characters
/// * `len` - Length of the sequence in characters
///
/// # Returns
///
/// A value in `0..=100`. An empty sequence reports 0.
#[inline]
#[must_use]
pub fn gc_percentage(gc: usize, len: usize) -> u8 {
    let pct = gc.saturating_mul(100).checked_div(len).unwrap_or(0);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

/// Computes the GC result for one raw input line.
///
/// Trailing whitespace is stripped first; lines that end up empty yield
/// `None` and must not be reported.
#[inline]
#[must_use]
pub fn analyze_sequence(line: &str) -> Option<GcResult<'_>> {
    let seq = trim_sequence(line)?;
    let len = seq.chars().count();
    Some(GcResult::new(gc_percentage(count_gc(seq), len), seq))
}
