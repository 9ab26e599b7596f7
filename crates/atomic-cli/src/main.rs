//! `atomic-build` entry point: argument parsing, logging initialization and
//! command dispatch.

use atomic_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(&args.root, resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(&args.root, check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
