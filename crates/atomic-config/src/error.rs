//! Error types for profile validation, merging and project discovery.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Schema errors raised while composing descriptors
    #[error("profile '{profile}' sets unknown field '{field}'")]
    UnknownField { profile: String, field: String },

    #[error("profile '{0}' is declared more than once")]
    DuplicateProfile(String),

    #[error("profile at position {0} has no name")]
    MissingName(usize),

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Project loading errors
    #[error("project manifest not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid config value for '{field}'")]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SchemaValidation { hint, .. } | Self::InvalidValue { hint, .. } => {
                hint.as_deref()
            }
            Self::UnknownField { .. } => {
                Some("Remove the field or check its spelling against the descriptor schema")
            }
            Self::DuplicateProfile(_) => Some("Profile names must be unique"),
            _ => None,
        }
    }
}
