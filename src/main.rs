//! Taxograph - relationship queries over hierarchical taxonomies
//!
//! Loads a taxonomy document (ImageNet `structure_released.xml` layout),
//! merges repeated identifiers into a DAG and answers ancestor, descendant,
//! depth and distance queries.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use taxograph_core::error::{ExitCode as TaxoExitCode, TaxoError};
use taxograph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), command = ?cli.command, "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(TaxoExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit_with(e.exit_code())
        }
    }
}

/// Handle a clap failure. JSON callers still get an error envelope, since
/// `Cli.format` does not exist yet.
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !argv_requests_json() {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::Io | ErrorKind::Format => TaxoError::Other(err.to_string()),
        _ => TaxoError::UsageError(err.to_string()),
    };
    report(&error, OutputFormat::Json, false);
    exit_with(error.exit_code())
}

fn report(error: &TaxoError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}

fn exit_with(code: TaxoExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Last `--format` value on the raw command line, parsed like the flag itself
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    let value = args.iter().enumerate().rev().find_map(|(i, arg)| {
        if arg == "--format" {
            args.get(i + 1).map(String::as_str)
        } else {
            arg.strip_prefix("--format=")
        }
    });

    value.and_then(|v| v.parse::<OutputFormat>().ok()) == Some(OutputFormat::Json)
}
