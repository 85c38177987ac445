// src/models.rs
pub mod gc_result;
pub mod input_source;
pub mod process_stats;

pub use gc_result::GcResult;
pub use input_source::InputSource;
pub use process_stats::ProcessStats;
