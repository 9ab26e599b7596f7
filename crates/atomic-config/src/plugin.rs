//! Build-time plugins and the shared plugin set.
//!
//! Plugins are plain values: the external bundler owns their side effects.
//! Position in a plugin list is execution order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier the version stamp is exposed under in library code
pub const VERSION_CONSTANT: &str = "__VERSION__";

/// Runtime guard prepended to entry bundles: library initialization only
/// runs when a `window` global exists.
pub const WINDOW_GUARD: &str = r#"typeof window !== "undefined" &&"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", deny_unknown_fields)]
pub enum Plugin {
    /// Remove stale output before building
    Clean,

    /// Compile-time constant replacement; values are JS source text
    Define { definitions: BTreeMap<String, String> },

    /// Text inserted at the top of emitted chunks
    #[serde(rename_all = "camelCase")]
    Banner {
        banner: String,
        /// Insert verbatim instead of wrapping in a comment
        raw: bool,
        /// Only touch entry chunks
        entry_only: bool,
    },
}

impl Plugin {
    /// Version stamp: `__VERSION__` replaced by the JSON string literal of
    /// `version`.
    pub fn version_stamp(version: &str) -> Self {
        let literal = serde_json::Value::String(version.to_string()).to_string();
        let mut definitions = BTreeMap::new();
        definitions.insert(VERSION_CONSTANT.to_string(), literal);
        Self::Define { definitions }
    }

    pub fn window_guard() -> Self {
        Self::Banner {
            banner: WINDOW_GUARD.to_string(),
            raw: true,
            entry_only: true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Define { .. } => "define",
            Self::Banner { .. } => "banner",
        }
    }
}

/// Cleanup, version stamp, window guard. Always in that order.
pub fn shared_plugin_set(version: &str) -> Vec<Plugin> {
    vec![
        Plugin::Clean,
        Plugin::version_stamp(version),
        Plugin::window_guard(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_set_has_fixed_order() {
        let names: Vec<_> = shared_plugin_set("1.0.0").iter().map(Plugin::name).collect();
        assert_eq!(names, vec!["clean", "define", "banner"]);
    }

    #[test]
    fn version_stamp_is_a_json_string_literal() {
        let Plugin::Define { definitions } = Plugin::version_stamp("2.3.4-beta.1") else {
            panic!("expected define plugin");
        };
        assert_eq!(definitions[VERSION_CONSTANT], "\"2.3.4-beta.1\"");
    }

    #[test]
    fn window_guard_is_raw_and_entry_only() {
        assert_eq!(
            Plugin::window_guard(),
            Plugin::Banner {
                banner: r#"typeof window !== "undefined" &&"#.to_string(),
                raw: true,
                entry_only: true,
            }
        );
    }

    #[test]
    fn plugins_serialize_with_kind_tag() {
        let value = serde_json::to_value(Plugin::window_guard()).unwrap();
        assert_eq!(value["kind"], "banner");
        assert_eq!(value["entryOnly"], true);
    }
}
