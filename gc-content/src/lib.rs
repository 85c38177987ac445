// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run, run_with_output};
pub use crate::core::gc::{analyze_sequence, count_gc, gc_percentage};
pub use crate::core::input::open_input;
pub use crate::core::processor::process_lines;
pub use crate::error::GcError;
pub use crate::logging::init_logging;
pub use crate::models::{GcResult, InputSource, ProcessStats};
pub use crate::utils::trim_sequence;
