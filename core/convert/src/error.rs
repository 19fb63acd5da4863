//! FILENAME: core/convert/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Persistence(#[from] persistence::PersistenceError),

    #[error("converter not available: {program}")]
    ConverterMissing { program: String },

    #[error("{program} failed ({status}): {stderr}")]
    ConverterFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("converter produced no output at {}", .0.display())]
    MissingOutput(PathBuf),
}
