//! CLI error types and their conversion to miette reports.

use std::path::PathBuf;
use thiserror::Error;

pub use atomic_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, validating or merging the build configuration failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing descriptors failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CLI error into a miette report, attaching the config hint.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match &err {
        CliError::Config(config) => match config.hint() {
            Some(hint) => miette::miette!(help = hint.to_string(), "{}", err),
            None => miette::miette!("{}", err),
        },
        _ => miette::miette!("{}", err),
    }
}
