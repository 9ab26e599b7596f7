//! Check command implementation.
//!
//! Validates the registry and merges every profile without emitting
//! descriptors.

use std::path::Path;

use atomic_config::ProjectDiscovery;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns the first configuration error found.
pub fn execute(root: &Path, _args: CheckArgs) -> Result<()> {
    ui::info("Checking build profiles...");

    let config = ProjectDiscovery::new(root).load()?;
    let descriptors = config.resolve()?;

    eprint!("{}", ui::format_profile_table(&descriptors));
    ui::success(&format!(
        "{} profile(s) valid for version {}",
        descriptors.len(),
        config.version()
    ));
    Ok(())
}
