// src/core/input.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::debug;

use crate::error::{GcError, Result};
use crate::models::InputSource;

/// Opens the input source for line-at-a-time reading.
///
/// The returned reader owns the file handle; dropping it closes the file.
///
/// # Errors
///
/// Returns [`GcError::Open`] if the file does not exist, cannot be read,
/// or is a directory.
#[inline]
pub fn open_input(source: &InputSource) -> Result<Box<dyn BufRead>> {
    match source {
        InputSource::Stdin => {
            debug!("Reading sequences from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
        InputSource::File(path) => {
            let open_err = |source| GcError::Open {
                path: path.clone(),
                source,
            };
            let file = File::open(path).map_err(open_err)?;
            if file.metadata().map_err(open_err)?.is_dir() {
                return Err(open_err(io::Error::new(
                    io::ErrorKind::IsADirectory,
                    "Is a directory",
                )));
            }
            debug!("Reading sequences from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
    }
}
