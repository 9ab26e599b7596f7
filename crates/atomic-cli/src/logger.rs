//! Logging setup for the `atomic-build` CLI.
//!
//! Logs go to stderr; stdout is reserved for descriptor JSON.
//!
//! The level is chosen in this order:
//! 1. `--verbose`: DEBUG for atomic crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: INFO for atomic crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "atomic_config=debug,atomic_cli=debug";
const QUIET_FILTER: &str = "atomic_config=error,atomic_cli=error";
const DEFAULT_FILTER: &str = "atomic_config=info,atomic_cli=info";

/// Build the filter for the given verbosity flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_filter_enables_debug() {
        let filter = filter_for(true, false).to_string();
        assert!(filter.contains("atomic_config=debug"));
    }

    #[test]
    fn quiet_filter_limits_to_errors() {
        let filter = filter_for(false, true).to_string();
        assert!(filter.contains("atomic_config=error"));
        assert!(!filter.contains("info"));
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logger(false, false, true);
        init_logger(true, false, true);
    }
}
