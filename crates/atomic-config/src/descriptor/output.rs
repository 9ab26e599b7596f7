use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::descriptor::LibraryTarget;

/// Output naming and wrapping.
///
/// Every knob is independent, so a profile only sets the ones it changes and
/// the rest fall through from the base (see [`OutputSpec::merged_over`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// Entry bundle file name pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Non-entry chunk file name pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map_filename: Option<String>,

    /// Absolute output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// URL prefix the bundle is served from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    /// Exported library name (browser global for UMD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_target: Option<LibraryTarget>,

    /// Which export of the entry module becomes the library value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_export: Option<String>,

    /// Expression the UMD wrapper attaches the global to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_object: Option<String>,

    /// Keys the schema does not recognise, reported by the merger
    #[serde(flatten)]
    pub unknown: BTreeMap<String, Value>,
}

impl OutputSpec {
    /// Shallow, key-by-key merge: every field set on `self` wins, unset
    /// fields are taken from `base`.
    pub fn merged_over(&self, base: &OutputSpec) -> OutputSpec {
        OutputSpec {
            filename: self.filename.clone().or_else(|| base.filename.clone()),
            chunk_filename: self
                .chunk_filename
                .clone()
                .or_else(|| base.chunk_filename.clone()),
            source_map_filename: self
                .source_map_filename
                .clone()
                .or_else(|| base.source_map_filename.clone()),
            path: self.path.clone().or_else(|| base.path.clone()),
            public_path: self
                .public_path
                .clone()
                .or_else(|| base.public_path.clone()),
            library: self.library.clone().or_else(|| base.library.clone()),
            library_target: self.library_target.or(base.library_target),
            library_export: self
                .library_export
                .clone()
                .or_else(|| base.library_export.clone()),
            global_object: self
                .global_object
                .clone()
                .or_else(|| base.global_object.clone()),
            unknown: BTreeMap::new(),
        }
    }
}

/// Pattern carries a `[hash]`, `[contenthash]` or `[chunkhash]` placeholder
pub fn is_hashed_pattern(pattern: &str) -> bool {
    ["[hash", "[contenthash", "[chunkhash"]
        .iter()
        .any(|placeholder| pattern.contains(placeholder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_fields_override_base_fields() {
        let base = OutputSpec {
            filename: Some("base.js".into()),
            global_object: Some("this".into()),
            ..OutputSpec::default()
        };
        let profile = OutputSpec {
            filename: Some("atomic.js".into()),
            library: Some("Atomic".into()),
            ..OutputSpec::default()
        };

        let merged = profile.merged_over(&base);
        assert_eq!(merged.filename.as_deref(), Some("atomic.js"));
        assert_eq!(merged.library.as_deref(), Some("Atomic"));
        assert_eq!(merged.global_object.as_deref(), Some("this"));
        assert_eq!(merged.public_path, None);
    }

    #[test]
    fn unknown_keys_are_not_carried_into_the_result() {
        let mut profile = OutputSpec::default();
        profile
            .unknown
            .insert("libraryTypo".into(), Value::Bool(true));

        let merged = profile.merged_over(&OutputSpec::default());
        assert!(merged.unknown.is_empty());
    }

    #[test]
    fn hashed_patterns_are_detected() {
        assert!(!is_hashed_pattern("atomic.js"));
        assert!(!is_hashed_pattern("[name].js"));
        assert!(is_hashed_pattern("[hash:8].js"));
        assert!(is_hashed_pattern("[id].[hash:8].js.map"));
        assert!(is_hashed_pattern("[name].[chunkhash].js"));
    }
}
