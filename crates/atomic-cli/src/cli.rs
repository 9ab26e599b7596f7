//! Command-line interface definition.
//!
//! - `atomic-build resolve [FLAG]...` - print the selected build descriptors
//! - `atomic-build check` - validate and merge every profile, print a summary

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Atomic build configuration composer
#[derive(Parser, Debug)]
#[command(
    name = "atomic-build",
    version,
    about = "Compose the Atomic library build descriptors",
    long_about = "Merges the shared base configuration into the debug, demo and dist\n\
                  profiles and prints the descriptors requested by the invoking bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root containing package.json and the optional atomic.toml
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the final descriptors for the requested profiles
    ///
    /// Each FLAG is `name` or `name=value`; only the name matters. With no
    /// flags every profile is printed. Flags starting with `WEBPACK_` belong
    /// to the bundler and never select a profile.
    ///
    /// Examples:
    ///   atomic-build resolve
    ///   atomic-build resolve dist
    ///   atomic-build resolve WEBPACK_BUNDLE=true debug demo
    Resolve(ResolveArgs),

    /// Validate the registry and merge every profile without printing
    /// descriptors
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Invocation flags
    #[arg(value_name = "FLAG", value_parser = parse_flag)]
    pub flags: Vec<String>,

    /// Write the descriptors to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {}

/// Reduce a `name` or `name=value` flag to its name.
///
/// # Errors
///
/// Returns an error message if the name is empty.
pub fn parse_flag(s: &str) -> Result<String, String> {
    let name = s.split_once('=').map_or(s, |(name, _)| name).trim();
    if name.is_empty() {
        return Err(format!("Flag has no name: '{}'", s));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_flag_keeps_name_only() {
        assert_eq!(parse_flag("dist").unwrap(), "dist");
        assert_eq!(parse_flag("WEBPACK_BUNDLE=true").unwrap(), "WEBPACK_BUNDLE");
        assert_eq!(parse_flag("debug=").unwrap(), "debug");
    }

    #[test]
    fn parse_flag_rejects_empty_name() {
        assert!(parse_flag("").is_err());
        assert!(parse_flag("=true").is_err());
    }

    #[test]
    fn resolve_collects_positional_flags() {
        let cli = Cli::try_parse_from(["atomic-build", "resolve", "dist", "debug=1", "--compact"])
            .unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.flags, vec!["dist", "debug"]);
                assert!(args.compact);
                assert!(args.out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_root_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["atomic-build", "check", "--root", "/tmp/project"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/tmp/project"));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["atomic-build", "-v", "-q", "check"]).is_err());
    }
}
