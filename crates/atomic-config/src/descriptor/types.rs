use serde::{Deserialize, Serialize};

/// Build mode understood by the external bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Unminified output, readable names (default)
    #[default]
    Development,
    /// Minified, optimized output
    Production,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chunk optimization knobs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
    /// Emit shared code into separate chunks
    #[serde(default)]
    pub split_chunks: bool,
}

/// Host-runtime polyfills the bundler may inject.
///
/// All three are disabled for a browser library: the bundle must not pretend
/// to have Node's `global`, `__filename` or `__dirname`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuntimeAssumptions {
    #[serde(default)]
    pub global: bool,

    #[serde(default, rename = "__filename")]
    pub filename: bool,

    #[serde(default, rename = "__dirname")]
    pub dirname: bool,
}

/// Source map strategy, emitted as `devtool`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapPolicy {
    /// External `.map` files
    SourceMap,
    /// Inline source maps (base64)
    InlineSourceMap,
    /// Fast rebuild maps wrapped in eval
    Eval,
    /// External maps without a reference comment
    HiddenSourceMap,
}

/// Module wrapper emitted around the library export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// Universal module definition: AMD, CommonJS or a browser global
    Umd,
    /// Plain `var` assignment
    Var,
    /// `module.exports =`
    Commonjs2,
    /// ES module output
    Module,
}
