//! Status messages and summary tables on stderr.

use std::sync::atomic::{AtomicBool, Ordering};

use atomic_config::FinalDescriptor;
use owo_colors::OwoColorize;

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise stderr must be a terminal.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decide once whether status messages are colored.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

fn colors() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub fn success(message: &str) {
    if colors() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

pub fn info(message: &str) {
    if colors() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {}", message);
    }
}

pub fn warning(message: &str) {
    if colors() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}

/// One row per descriptor: name, mode, entry, bundle file name, plugin
/// count and whether a dev server is attached.
pub fn format_profile_table(descriptors: &[FinalDescriptor]) -> String {
    let width = descriptors
        .iter()
        .map(|d| d.name.len())
        .max()
        .unwrap_or(0)
        .max("profile".len());

    let mut out = format!(
        "{:<width$}  {:<11}  {:<14}  {:<16}  {:>7}  {}\n",
        "profile", "mode", "entry", "filename", "plugins", "dev server"
    );
    for d in descriptors {
        out.push_str(&format!(
            "{:<width$}  {:<11}  {:<14}  {:<16}  {:>7}  {}\n",
            d.name,
            d.mode.as_str(),
            d.entry,
            d.output.filename.as_deref().unwrap_or("-"),
            d.plugins.len(),
            if d.dev_server.is_some() { "yes" } else { "no" },
        ));
    }
    out
}
