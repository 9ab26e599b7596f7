//! Static checks on the profile registry, run before anything is merged.

use std::collections::HashSet;

use crate::descriptor::{LibraryTarget, Mode};
use crate::error::{ConfigError, Result};
use crate::profile::ProfileRegistry;

/// Trait for pluggable registry validation strategies
pub trait ConfigValidator {
    fn validate(&self, registry: &ProfileRegistry) -> Result<()>;
}

/// Authoring checks that need no filesystem access.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use atomic_config::{ConfigValidator, ProfileRegistry, SchemaValidator};
///
/// let registry = ProfileRegistry::standard(Path::new("."));
/// SchemaValidator.validate(&registry).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, registry: &ProfileRegistry) -> Result<()> {
        if registry.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no build profiles declared".to_string(),
                hint: Some("Declare at least one profile in the registry".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for (position, profile) in registry.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(ConfigError::MissingName(position));
            }
            if !seen.insert(profile.name.as_str()) {
                return Err(ConfigError::DuplicateProfile(profile.name.clone()));
            }

            if profile.output.library_target == Some(LibraryTarget::Umd)
                && profile.output.library.is_none()
            {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "profile '{}' wraps output as UMD without a library name",
                        profile.name
                    ),
                    hint: Some("Set output.library to the browser global name".to_string()),
                });
            }

            // A profile without a mode is checked against the base at merge time
            let non_dev_mode = profile.mode.filter(|mode| *mode != Mode::Development);
            if let (Some(_), Some(mode)) = (&profile.dev_server, non_dev_mode) {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "profile '{}' declares a dev server in {} mode",
                        profile.name, mode
                    ),
                    hint: Some(
                        "Dev servers are only supported for development profiles".to_string(),
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema validation
pub fn validate_registry(registry: &ProfileRegistry) -> Result<()> {
    SchemaValidator.validate(registry)
}
