//! Base + profile composition.
//!
//! Per-field policy:
//!
//! | field                                              | policy          |
//! |----------------------------------------------------|-----------------|
//! | `mode`, `entry`, `devtool`                         | scalar override |
//! | `optimization`, `resolve`, `module`, `node`        | full replace    |
//! | `plugins`                                          | full replace    |
//! | `output`                                           | shallow merge   |
//! | `devServer`                                        | profile only    |

use serde::{Deserialize, Serialize};

use crate::base::BaseDescriptor;
use crate::descriptor::{
    DevServerSpec, Mode, ModuleRules, OptimizationPolicy, OutputSpec, ResolutionRules,
    RuntimeAssumptions, SourceMapPolicy,
};
use crate::error::{ConfigError, Result};
use crate::plugin::Plugin;
use crate::profile::Profile;

/// Fully resolved configuration for one build target, in the external
/// bundler's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalDescriptor {
    pub name: String,
    pub mode: Mode,
    pub entry: String,
    pub optimization: OptimizationPolicy,
    pub resolve: ResolutionRules,
    pub module: ModuleRules,
    pub node: RuntimeAssumptions,
    pub output: OutputSpec,
    pub plugins: Vec<Plugin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapPolicy>,
}

/// Combine `base` with `profile`.
///
/// Pure: identical inputs give identical output. Fails on the first field the
/// descriptor schema does not know, naming the profile and the field.
pub fn merge(base: &BaseDescriptor, profile: &Profile) -> Result<FinalDescriptor> {
    reject_unknown_fields(profile)?;

    let descriptor = FinalDescriptor {
        name: profile.name.clone(),
        mode: profile.mode.unwrap_or(base.mode),
        entry: profile.entry.clone().unwrap_or_else(|| base.entry.clone()),
        optimization: profile
            .optimization
            .clone()
            .unwrap_or_else(|| base.optimization.clone()),
        resolve: profile.resolve.clone().unwrap_or_else(|| base.resolve.clone()),
        module: profile.module.clone().unwrap_or_else(|| base.module.clone()),
        node: profile.node.unwrap_or(base.node),
        output: profile.output.merged_over(&base.output),
        plugins: profile
            .plugins
            .clone()
            .unwrap_or_else(|| base.plugins.clone()),
        dev_server: profile.dev_server.clone(),
        devtool: profile.devtool.or(base.devtool),
    };

    tracing::debug!(
        profile = %descriptor.name,
        mode = %descriptor.mode,
        plugins = descriptor.plugins.len(),
        "merged profile"
    );

    Ok(descriptor)
}

/// Merge every profile, stopping at the first schema error.
pub fn merge_all<'a>(
    base: &BaseDescriptor,
    profiles: impl IntoIterator<Item = &'a Profile>,
) -> Result<Vec<FinalDescriptor>> {
    profiles
        .into_iter()
        .map(|profile| merge(base, profile))
        .collect()
}

fn reject_unknown_fields(profile: &Profile) -> Result<()> {
    let nested = profile
        .output
        .unknown
        .keys()
        .map(|key| format!("output.{key}"));
    let server = profile
        .dev_server
        .iter()
        .flat_map(|server| server.unknown.keys())
        .map(|key| format!("devServer.{key}"));

    match profile
        .unknown
        .keys()
        .cloned()
        .chain(nested)
        .chain(server)
        .next()
    {
        Some(field) => Err(ConfigError::UnknownField {
            profile: profile.name.clone(),
            field,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::shared_plugin_set;
    use crate::profile::ProfileRegistry;
    use serde_json::json;
    use std::path::{Path, PathBuf};

    fn base() -> BaseDescriptor {
        BaseDescriptor::standard(Path::new("/project"), "1.4.0")
    }

    fn profile(name: &str) -> Profile {
        ProfileRegistry::standard(Path::new("/project"))
            .get(name)
            .cloned()
            .unwrap()
    }

    #[test]
    fn profile_mode_wins() {
        let dist = merge(&base(), &profile("dist")).unwrap();
        assert_eq!(dist.mode, Mode::Production);
    }

    #[test]
    fn missing_mode_falls_back_to_base() {
        let mut base = base();
        base.mode = Mode::Production;
        let custom = Profile {
            mode: None,
            ..Profile::new("custom", Mode::Development)
        };

        let merged = merge(&base, &custom).unwrap();
        assert_eq!(merged.mode, Mode::Production);
    }

    #[test]
    fn entry_falls_back_to_base() {
        let debug = merge(&base(), &profile("debug")).unwrap();
        let demo = merge(&base(), &profile("demo")).unwrap();
        assert_eq!(debug.entry, "./src/atomic");
        assert_eq!(demo.entry, "./demo/main");
    }

    #[test]
    fn missing_plugin_list_inherits_shared_set() {
        let debug = merge(&base(), &profile("debug")).unwrap();
        assert_eq!(debug.plugins, shared_plugin_set("1.4.0"));
    }

    #[test]
    fn explicit_plugin_list_replaces_base() {
        let mut custom = Profile::new("custom", Mode::Development);
        custom.plugins = Some(vec![Plugin::Clean]);
        let merged = merge(&base(), &custom).unwrap();
        assert_eq!(merged.plugins, vec![Plugin::Clean]);
    }

    #[test]
    fn output_is_merged_key_by_key() {
        let debug = merge(&base(), &profile("debug")).unwrap();
        assert_eq!(debug.output.path, Some(PathBuf::from("/project/dist")));
        assert_eq!(debug.output.global_object.as_deref(), Some("this"));
        assert_eq!(debug.output.filename.as_deref(), Some("atomic.js"));
    }

    #[test]
    fn module_rules_are_replaced_wholesale() {
        let mut custom = Profile::new("custom", Mode::Development);
        custom.module = Some(ModuleRules {
            strict_export_presence: false,
            rules: Vec::new(),
        });
        let merged = merge(&base(), &custom).unwrap();
        assert!(merged.module.rules.is_empty());
        assert!(!merged.module.strict_export_presence);
    }

    #[test]
    fn merge_is_deterministic() {
        let first = merge(&base(), &profile("demo")).unwrap();
        let second = merge(&base(), &profile("demo")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_top_level_field_names_profile_and_field() {
        let mut dist = profile("dist");
        dist.unknown.insert("minify".into(), json!(true));

        let err = merge(&base(), &dist).unwrap_err();
        match err {
            ConfigError::UnknownField { profile, field } => {
                assert_eq!(profile, "dist");
                assert_eq!(field, "minify");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_nested_field_is_qualified() {
        let mut demo = profile("demo");
        demo.dev_server
            .as_mut()
            .unwrap()
            .unknown
            .insert("port".into(), json!(8080));

        let err = merge(&base(), &demo).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownField { ref field, .. } if field == "devServer.port"
        ));
    }

    #[test]
    fn unknown_collection_field_is_reported_by_path() {
        let mut dist = profile("dist");
        dist.apply_override(&json!({ "resolve": { "extension": [".mjs"] } }))
            .unwrap();

        let err = merge(&base(), &dist).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownField { ref profile, ref field }
                if profile == "dist" && field == "resolve.extension"
        ));
    }

    #[test]
    fn merge_all_stops_at_first_schema_error() {
        let mut registry: Vec<Profile> = ProfileRegistry::standard(Path::new("/project"))
            .iter()
            .cloned()
            .collect();
        registry[1].output.unknown.insert("libary".into(), json!("Typo"));

        let err = merge_all(&base(), &registry).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownField { ref profile, ref field } if profile == "demo" && field == "output.libary"
        ));
    }

    #[test]
    fn final_descriptor_uses_bundler_field_names() {
        let demo = merge(&base(), &profile("demo")).unwrap();
        let value = serde_json::to_value(&demo).unwrap();
        assert_eq!(value["devtool"], "source-map");
        assert_eq!(value["devServer"]["historyApiFallback"], true);
        assert_eq!(value["output"]["libraryTarget"], "umd");
        assert_eq!(value["module"]["strictExportPresence"], true);
    }
}
