// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GcError {
    #[error("Failed to open input file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input at line {line}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output")]
    Write {
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GcError>;
