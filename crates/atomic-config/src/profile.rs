//! Named build targets and the ordered registry that declares them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::descriptor::{
    DevServerSpec, LibraryTarget, Mode, ModuleRules, OptimizationPolicy, OutputSpec,
    ResolutionRules, RuntimeAssumptions, SourceMapPolicy,
};
use crate::error::{ConfigError, Result as ConfigResult};
use crate::plugin::Plugin;

/// Demo application entry module, relative to the project root
pub const DEMO_ENTRY: &str = "./demo/main";

/// A build target, stated as its differences from the base descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,

    /// Falls back to the base mode when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    #[serde(default)]
    pub output: OutputSpec,

    /// Replaces the base plugin list when present, even when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<Plugin>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<ResolutionRules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleRules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<RuntimeAssumptions>,

    /// Keys the schema does not recognise, by dotted path, reported by the
    /// merger. Filled in by [`Profile::apply_override`].
    #[serde(skip)]
    pub unknown: BTreeMap<String, Value>,
}

impl Profile {
    pub fn new(name: impl Into<String>, mode: Mode) -> Self {
        Self {
            name: name.into(),
            mode: Some(mode),
            entry: None,
            output: OutputSpec::default(),
            plugins: None,
            dev_server: None,
            devtool: None,
            optimization: None,
            resolve: None,
            module: None,
            node: None,
            unknown: BTreeMap::new(),
        }
    }

    /// Layer an override table on top of this profile.
    ///
    /// Objects merge recursively, everything else (arrays included) is
    /// replaced. Keys no descriptor type recognises, at any depth, are
    /// recorded in `unknown` so the merger can report them. Unknown plugin
    /// fields fail here, since plugins are matched by their `kind` tag.
    pub fn apply_override(&mut self, overrides: &Value) -> ConfigResult<()> {
        if overrides.is_null() {
            return Ok(());
        }

        let mut merged =
            serde_json::to_value(&*self).map_err(|err| ConfigError::InvalidProfileOverride {
                message: format!("{}: {}", self.name, err),
            })?;
        merge_values(&mut merged, overrides);

        let name = self.name.clone();
        let mut ignored = Vec::new();
        let mut updated: Profile = serde_ignored::deserialize(merged.clone(), |path| {
            ignored.push(field_segments(&path));
        })
        .map_err(|err| ConfigError::InvalidProfileOverride {
            message: format!("{}: {}", name, err),
        })?;

        // Overrides are keyed by profile, they cannot rename it
        updated.name = name;
        updated.unknown = std::mem::take(&mut self.unknown);
        for segments in ignored {
            let value = value_at(&merged, &segments).cloned().unwrap_or(Value::Null);
            updated.unknown.insert(segments.join("."), value);
        }
        *self = updated;
        Ok(())
    }
}

/// Ordered, immutable set of build targets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
}

impl ProfileRegistry {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// `debug`, `demo` and `dist`, in that order.
    pub fn standard(root: &Path) -> Self {
        Self::new(vec![debug_profile(), demo_profile(root), dist_profile()])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Apply per-profile override tables (from `atomic.toml` or the
    /// environment). Every key must name a registered profile.
    pub fn with_overrides(mut self, overrides: &IndexMap<String, Value>) -> ConfigResult<Self> {
        for (name, table) in overrides {
            let profile = self
                .profiles
                .iter_mut()
                .find(|profile| &profile.name == name)
                .ok_or_else(|| ConfigError::InvalidProfileOverride {
                    message: format!("no profile named '{name}' to override"),
                })?;
            profile.apply_override(table)?;
            tracing::debug!(profile = %name, "applied profile override");
        }
        Ok(self)
    }
}

impl<'a> IntoIterator for &'a ProfileRegistry {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn library_output(filename: &str, library: &str) -> OutputSpec {
    OutputSpec {
        filename: Some(filename.into()),
        chunk_filename: Some("[name].js".into()),
        source_map_filename: Some("[id].[hash:8].js.map".into()),
        public_path: Some("/dist/".into()),
        library: Some(library.into()),
        library_target: Some(LibraryTarget::Umd),
        library_export: Some("default".into()),
        ..OutputSpec::default()
    }
}

fn debug_profile() -> Profile {
    Profile {
        output: library_output("atomic.js", "Atomic"),
        devtool: Some(SourceMapPolicy::SourceMap),
        ..Profile::new("debug", Mode::Development)
    }
}

fn demo_profile(root: &Path) -> Profile {
    Profile {
        entry: Some(DEMO_ENTRY.into()),
        output: library_output("atomic-demo.js", "AtomicDemo"),
        plugins: Some(Vec::new()),
        devtool: Some(SourceMapPolicy::SourceMap),
        dev_server: Some(DevServerSpec {
            compress: true,
            history_api_fallback: true,
            hot: true,
            ..DevServerSpec::new(root.join("demo"))
        }),
        ..Profile::new("demo", Mode::Development)
    }
}

fn dist_profile() -> Profile {
    Profile {
        output: OutputSpec {
            filename: Some("[name].js".into()),
            chunk_filename: Some("[hash:8].js".into()),
            library: Some("Atomic".into()),
            library_target: Some(LibraryTarget::Umd),
            library_export: Some("default".into()),
            ..OutputSpec::default()
        },
        ..Profile::new("dist", Mode::Production)
    }
}

/// Path of an ignored key, without the `Option`/newtype steps serde inserts
fn field_segments(path: &serde_ignored::Path<'_>) -> Vec<String> {
    use serde_ignored::Path;

    match path {
        Path::Root => Vec::new(),
        Path::Seq { parent, index } => {
            let mut segments = field_segments(parent);
            segments.push(index.to_string());
            segments
        }
        Path::Map { parent, key } => {
            let mut segments = field_segments(parent);
            segments.push(key.clone());
            segments
        }
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => field_segments(parent),
    }
}

fn value_at<'v>(value: &'v Value, segments: &[String]) -> Option<&'v Value> {
    segments.iter().try_fold(value, |current, segment| match current {
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => current.get(segment.as_str()),
    })
}

/// Recursive merge of `update` into `target`: objects key by key, any other
/// value replaces what was there.
pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
