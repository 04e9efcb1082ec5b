//! flaky-check: schema checker for the flaky-test dataset CSV files.
//!
//! This is the main entry point for the `flaky-check` CLI. It parses
//! arguments, installs logging, dispatches to the command handler, and maps
//! errors to exit codes.

mod changes;
mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod git;
mod logging;
mod run_log;
pub mod schema;
pub mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("Error: {}", err);
        return ExitCode::from(err.exit_code() as u8);
    }

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
