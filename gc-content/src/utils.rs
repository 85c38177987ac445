// src/utils.rs

/// Strips trailing whitespace (including the line terminator) from a raw
/// input line. Returns `None` when nothing is left.
#[inline]
#[must_use]
pub fn trim_sequence(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_end();
    (!trimmed.is_empty()).then_some(trimmed)
}
