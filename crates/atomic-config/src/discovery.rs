//! File-based project discovery for CLI use
//!
//! Reads the version stamp from `package.json` and optional per-profile
//! overrides from `atomic.toml` layered with `ATOMIC_` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};

/// Manifest the version stamp is read from
pub const MANIFEST_FILE: &str = "package.json";

/// Optional profile override file
pub const OVERRIDES_FILE: &str = "atomic.toml";

/// Environment prefix for overrides, e.g. `ATOMIC_PROFILES__DIST__DEVTOOL`.
/// Keys are lowercased, so only single-word fields can be set this way.
pub const ENV_PREFIX: &str = "ATOMIC_";

/// Only `ATOMIC_PROFILES__*` variables are read; other `ATOMIC_` names
/// belong to someone else.
fn is_profile_override(key: &str) -> bool {
    key.to_ascii_lowercase().starts_with("profiles__")
}

#[derive(Debug, Default, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    profiles: IndexMap<String, Value>,
}

/// Project discovery rooted at one directory
///
/// # Example
///
/// ```no_run
/// use atomic_config::ProjectDiscovery;
///
/// let config = ProjectDiscovery::new(".").load().unwrap();
/// let descriptors = config.resolve().unwrap();
/// ```
pub struct ProjectDiscovery {
    root: PathBuf,
}

impl ProjectDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current project version, read fresh from the manifest.
    ///
    /// # Errors
    ///
    /// `ConfigError::NotFound` if there is no manifest, `InvalidValue` if it
    /// is not JSON or has no string `version`.
    pub fn version(&self) -> Result<String> {
        let path = self.root.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let content = fs::read_to_string(&path)?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: MANIFEST_FILE.to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        parsed
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "version".to_string(),
                hint: Some("Add a \"version\" string to package.json".to_string()),
            })
    }

    /// Per-profile override tables, file first, then environment.
    pub fn overrides(&self) -> Result<IndexMap<String, Value>> {
        let file: OverrideFile = Figment::new()
            .merge(Toml::file(self.root.join(OVERRIDES_FILE)))
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .filter(|key| is_profile_override(key.as_str()))
                    .split("__"),
            )
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: OVERRIDES_FILE.to_string(),
                hint: Some(e.to_string()),
            })?;
        Ok(file.profiles)
    }

    /// Build the configuration: standard base and registry for this root,
    /// stamped with the manifest version, with overrides applied.
    pub fn load(&self) -> Result<BuildConfig> {
        let version = self.version()?;
        let overrides = self.overrides()?;
        tracing::debug!(
            root = %self.root.display(),
            %version,
            overrides = overrides.len(),
            "loaded project"
        );

        let standard = BuildConfig::standard(&self.root, &version);
        let registry = standard.registry().clone().with_overrides(&overrides)?;
        Ok(BuildConfig::new(standard.base().clone(), registry))
    }
}

/// Discover the project in the current directory (convenience function)
pub fn discover() -> Result<BuildConfig> {
    let root = std::env::current_dir()?;
    ProjectDiscovery::new(&root).load()
}
