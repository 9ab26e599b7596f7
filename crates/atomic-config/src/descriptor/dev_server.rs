//! Development server settings handed to the external dev server.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSpec {
    /// Directory served as static content
    pub static_dir: PathBuf,

    /// URL the static directory is mounted at
    #[serde(default = "default_static_public_path")]
    pub static_public_path: String,

    /// Gzip responses
    #[serde(default)]
    pub compress: bool,

    /// Serve the index page for unknown routes (single-page app routing)
    #[serde(default)]
    pub history_api_fallback: bool,

    /// Hot module reload
    #[serde(default)]
    pub hot: bool,

    #[serde(flatten)]
    pub unknown: BTreeMap<String, Value>,
}

impl DevServerSpec {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
            static_public_path: default_static_public_path(),
            compress: false,
            history_api_fallback: false,
            hot: false,
            unknown: BTreeMap::new(),
        }
    }
}

fn default_static_public_path() -> String {
    "/".into()
}
