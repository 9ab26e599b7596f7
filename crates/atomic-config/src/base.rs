//! Configuration shared by every build target.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;

use crate::descriptor::{
    Mode, ModuleRule, ModuleRules, OptimizationPolicy, OutputSpec, ResolutionRules,
    RuntimeAssumptions, SourceMapPolicy,
};
use crate::plugin::{Plugin, shared_plugin_set};

/// Library entry module, relative to the project root
pub const LIBRARY_ENTRY: &str = "./src/atomic";

/// Browsers the transpiler must support
pub const BROWSER_TARGETS: &[&str] = &[
    "chrome >= 47",
    "firefox >= 51",
    "ie >= 11",
    "safari >= 8",
    "ios >= 8",
    "android >= 4",
];

/// Values every profile starts from. Profiles only state their deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseDescriptor {
    pub mode: Mode,

    pub entry: String,

    pub optimization: OptimizationPolicy,

    pub resolve: ResolutionRules,

    pub module: ModuleRules,

    /// Runtime environment assumptions
    pub node: RuntimeAssumptions,

    /// Output knobs common to all targets
    pub output: OutputSpec,

    /// Inherited by profiles that declare no plugin list
    pub plugins: Vec<Plugin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapPolicy>,

    /// Project version the shared plugin set is stamped with
    #[serde(skip)]
    pub version: String,
}

impl BaseDescriptor {
    /// The Atomic library base: TypeScript/JS through babel for old
    /// browsers, no code splitting, UMD-friendly output into `<root>/dist`.
    pub fn standard(root: &Path, version: &str) -> Self {
        Self {
            mode: Mode::Development,
            entry: LIBRARY_ENTRY.to_string(),
            optimization: OptimizationPolicy {
                split_chunks: false,
            },
            resolve: ResolutionRules {
                extensions: vec![".ts".into(), ".js".into()],
            },
            module: ModuleRules {
                strict_export_presence: true,
                rules: vec![transpile_rule(root)],
            },
            node: RuntimeAssumptions {
                global: false,
                filename: false,
                dirname: false,
            },
            output: OutputSpec {
                path: Some(root.join("dist")),
                global_object: Some("this".into()),
                ..OutputSpec::default()
            },
            plugins: shared_plugin_set(version),
            devtool: None,
            version: version.to_string(),
        }
    }
}

fn transpile_rule(root: &Path) -> ModuleRule {
    ModuleRule {
        test: r"\.(ts|js)$".into(),
        exclude: vec![root.join("node_modules")],
        loader: "babel-loader".into(),
        options: json!({
            "babelrc": false,
            "presets": [
                "@babel/preset-typescript",
                ["@babel/preset-env", {
                    "loose": true,
                    "modules": false,
                    "targets": { "browsers": BROWSER_TARGETS }
                }]
            ],
            "plugins": [
                ["@babel/plugin-proposal-class-properties", { "loose": true }],
                "@babel/plugin-proposal-object-rest-spread",
                ["@babel/plugin-transform-object-assign"],
                ["@babel/plugin-proposal-optional-chaining"]
            ]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn standard_base_targets_the_library_entry() {
        let base = BaseDescriptor::standard(Path::new("/project"), "1.0.0");
        assert_eq!(base.mode, Mode::Development);
        assert_eq!(base.entry, "./src/atomic");
        assert!(!base.optimization.split_chunks);
        assert_eq!(base.resolve.extensions, vec![".ts", ".js"]);
    }

    #[test]
    fn transpile_rule_excludes_dependencies() {
        let base = BaseDescriptor::standard(Path::new("/project"), "1.0.0");
        assert!(base.module.strict_export_presence);
        let rule = &base.module.rules[0];
        assert_eq!(rule.loader, "babel-loader");
        assert_eq!(rule.exclude, vec![PathBuf::from("/project/node_modules")]);
        assert_eq!(rule.options["presets"][1][1]["targets"]["browsers"][2], "ie >= 11");
    }

    #[test]
    fn runtime_polyfills_are_disabled() {
        let base = BaseDescriptor::standard(Path::new("/project"), "1.0.0");
        let node = serde_json::to_value(base.node).unwrap();
        assert_eq!(
            node,
            json!({ "global": false, "__filename": false, "__dirname": false })
        );
    }

    #[test]
    fn base_carries_the_shared_plugin_set() {
        let base = BaseDescriptor::standard(Path::new("/project"), "3.1.0");
        assert_eq!(base.plugins, shared_plugin_set("3.1.0"));
        assert_eq!(base.version, "3.1.0");
        assert_eq!(base.output.path, Some(PathBuf::from("/project/dist")));
    }
}
