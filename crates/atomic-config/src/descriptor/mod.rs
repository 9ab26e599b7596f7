//! Typed building blocks shared by the base descriptor, profiles and final
//! descriptors.

mod dev_server;
mod output;
mod rules;
mod types;

pub use dev_server::DevServerSpec;
pub use output::{OutputSpec, is_hashed_pattern};
pub use rules::{ModuleRule, ModuleRules, ResolutionRules};
pub use types::{LibraryTarget, Mode, OptimizationPolicy, RuntimeAssumptions, SourceMapPolicy};
