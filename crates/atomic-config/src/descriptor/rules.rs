use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Module resolution rules
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionRules {
    /// Extensions tried, in order, for extension-less imports
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Transform rules applied to every module in the graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRules {
    /// Missing exports are a hard error instead of a warning
    #[serde(default)]
    pub strict_export_presence: bool,

    /// Ordered transform rules; the first matching rule wins
    #[serde(default)]
    pub rules: Vec<ModuleRule>,
}

/// A single loader rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Regex source matched against module paths
    pub test: String,

    /// Paths never handed to the loader
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PathBuf>,

    /// Loader package name
    pub loader: String,

    /// Loader options, forwarded untouched to the transpiler
    #[serde(default)]
    pub options: Value,
}
