// src/models/gc_result.rs
use std::fmt;

/// GC content of a single trimmed sequence line.
///
/// Borrows the line it was computed from so the echoed text keeps its
/// original casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GcResult<'a> {
    pub percentage: u8,
    pub sequence: &'a str,
}

impl<'a> GcResult<'a> {
    #[inline]
    #[must_use]
    pub const fn new(percentage: u8, sequence: &'a str) -> Self {
        Self {
            percentage,
            sequence,
        }
    }
}

impl fmt::Display for GcResult<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}%: {}", self.percentage, self.sequence)
    }
}
