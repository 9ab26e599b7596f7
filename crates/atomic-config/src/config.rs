//! The composition root: one immutable base + registry pair, resolved into
//! final descriptors on demand.

use std::path::Path;

use crate::base::BaseDescriptor;
use crate::error::Result;
use crate::merge::{FinalDescriptor, merge_all};
use crate::profile::ProfileRegistry;
use crate::selector::{InvocationFlags, select};
use crate::validation::{ConfigValidator, SchemaValidator};

/// Static build configuration, constructed once and passed by reference.
///
/// # Example
///
/// ```
/// use atomic_config::{BuildConfig, InvocationFlags};
///
/// let config = BuildConfig::standard(".", "1.2.0");
/// let flags: InvocationFlags = ["dist"].into_iter().collect();
///
/// let selected = config.select(&flags).unwrap();
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].name, "dist");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    base: BaseDescriptor,
    registry: ProfileRegistry,
}

impl BuildConfig {
    pub fn new(base: BaseDescriptor, registry: ProfileRegistry) -> Self {
        Self { base, registry }
    }

    /// The Atomic library targets rooted at `root`, stamped with `version`.
    pub fn standard(root: impl AsRef<Path>, version: &str) -> Self {
        let root = root.as_ref();
        Self::new(
            BaseDescriptor::standard(root, version),
            ProfileRegistry::standard(root),
        )
    }

    pub fn base(&self) -> &BaseDescriptor {
        &self.base
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Project version stamped into the shared plugins
    pub fn version(&self) -> &str {
        &self.base.version
    }

    /// Validate the registry and merge every profile, in registry order.
    ///
    /// Nothing is cached: each call recomputes from the static inputs.
    pub fn resolve(&self) -> Result<Vec<FinalDescriptor>> {
        SchemaValidator.validate(&self.registry)?;
        merge_all(&self.base, &self.registry)
    }

    /// Resolve, then keep only what `flags` asked for.
    pub fn select(&self, flags: &InvocationFlags) -> Result<Vec<FinalDescriptor>> {
        Ok(select(flags, self.resolve()?))
    }
}
