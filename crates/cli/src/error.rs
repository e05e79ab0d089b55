//! Result and Error types for the dosekit binary

// standard library
use std::path::PathBuf;

/// Type alias for Result<T, cli::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// Anything that can stop a run
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("config file not found: {0:?}")]
    ConfigNotFound(PathBuf),

    #[error("invalid config file")]
    ConfigError(#[from] serde_json::Error),

    #[error(transparent)]
    PhantomError(#[from] dosekit_phantom::Error),

    #[error(transparent)]
    DoseError(#[from] dosekit_dose::Error),

    #[error("failed to initialise logger")]
    LoggerError(#[from] log::SetLoggerError),
}
