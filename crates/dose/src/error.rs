//! Result and Error types for dosekit-dose

// standard library
use std::path::PathBuf;

// dosekit modules
use dosekit_phantom::Axis;

/// Type alias for Result<T, dose::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `dosekit-dose` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("dose file not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("phantom error")]
    PhantomError(#[from] dosekit_phantom::Error),

    #[error("failed CSV operation")]
    CsvError(#[from] csv::Error),

    #[error("failed serde JSON operation")]
    JsonError(#[from] serde_json::Error),

    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    #[error("invalid dose values")]
    ValueError(#[from] dosekit_utils::Error),

    #[error("failed to initialise progress bar: {0}")]
    ProgressBar(String),

    #[error("malformed line {line} ({reason}): \"{content}\"")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("no dose recorded for index {index} (voxel {voxel:?})")]
    MissingIndex { index: usize, voxel: [usize; 3] },

    #[error("{axis} centre index {index} is outside the usable range for {count} voxels")]
    CenterOutOfRange { axis: Axis, index: i64, count: usize },

    #[error("inconsistent number of values (expected {expected:?}, found {found:?})")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("failed to infer index offset from \"{0}\"")]
    InvalidOffset(String),
}
