//! Atomic build CLI.
//!
//! Thin operator surface over `atomic-config`: loads the project, resolves
//! the build profiles and hands the selected descriptors to the external
//! bundler as JSON.
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `resolve` and `check`
//! - [`error`] - CLI errors and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
