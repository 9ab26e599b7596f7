//! Build configuration composer for the Atomic UMD library.
//!
//! A [`BaseDescriptor`] holds what every target shares, a
//! [`ProfileRegistry`] declares the `debug`, `demo` and `dist` targets as
//! deltas, [`merge`] combines the two and [`select`] narrows the result to
//! the profiles an invocation asked for.

pub mod base;
pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod plugin;
pub mod profile;
pub mod selector;
pub mod validation;

// Re-export main types
pub use base::*;
pub use config::*;
pub use descriptor::*;
pub use error::*;
pub use merge::*;
pub use plugin::*;
pub use profile::*;
pub use selector::*;

// Re-export discovery and validation
pub use discovery::{ProjectDiscovery, discover};
pub use validation::{ConfigValidator, SchemaValidator, validate_registry};
