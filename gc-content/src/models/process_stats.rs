// src/models/process_stats.rs

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStats {
    pub lines_read: u64,
    pub sequences: u64,
    pub skipped_blank: u64,
}

impl ProcessStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines_read: 0,
            sequences: 0,
            skipped_blank: 0,
        }
    }
}
