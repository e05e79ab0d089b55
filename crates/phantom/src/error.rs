//! Result and Error types for the phantom module

use std::path::PathBuf;

/// Type alias for `Result<T, phantom::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `dosekit-phantom`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Header file does not exist
    #[error("header file not found: {0:?}")]
    FileNotFound(PathBuf),

    /// A recognised directive is too short or has a non-numeric value
    #[error("malformed line {line} ({reason}): \"{content}\"")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    /// A required directive never appeared before the end of input
    #[error("no {0} directive found in header")]
    MissingDirective(&'static str),

    /// Voxel sizes must be positive and counts non-zero
    #[error("invalid phantom grid: {0}")]
    InvalidGrid(String),
}
