//! Command implementations.
//!
//! - [`resolve`] - print the selected build descriptors
//! - [`check`] - validate and merge every profile
//!
//! Each command exposes an `execute` function taking the project root and
//! its parsed arguments.

pub mod check;
pub mod resolve;

pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
