//! Resolve command implementation.

use std::fs;
use std::io::Write;
use std::path::Path;

use atomic_config::{FinalDescriptor, InvocationFlags, ProjectDiscovery};

use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the resolve command.
///
/// Loads the project at `root`, selects the descriptors named by the flags
/// and writes them as a JSON array to stdout or `--out`.
///
/// # Errors
///
/// Returns configuration errors (missing manifest, invalid overrides,
/// unknown profile fields) before anything is written.
pub fn execute(root: &Path, args: ResolveArgs) -> Result<()> {
    let config = ProjectDiscovery::new(root).load()?;
    let flags: InvocationFlags = args.flags.iter().map(String::as_str).collect();
    let descriptors = config.select(&flags)?;

    let json = render(&descriptors, args.compact)?;
    match &args.out {
        Some(path) => {
            fs::write(path, json + "\n").map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            ui::success(&format!(
                "Wrote {} descriptor(s) to {}",
                descriptors.len(),
                path.display()
            ));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

/// Serialize descriptors as a JSON array.
pub fn render(descriptors: &[FinalDescriptor], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(descriptors)?
    } else {
        serde_json::to_string_pretty(descriptors)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomic_config::BuildConfig;

    #[test]
    fn compact_render_is_single_line_array() {
        let descriptors = BuildConfig::standard("/project", "1.0.0").resolve().unwrap();
        let json = render(&descriptors, true).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[1]["name"], "demo");
    }

    #[test]
    fn empty_selection_renders_empty_array() {
        assert_eq!(render(&[], true).unwrap(), "[]");
    }
}
