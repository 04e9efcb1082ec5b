//! CLI argument parsing for flaky-check.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::schema::SchemaKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flaky-check: schema checker for flaky-test dataset CSV files.
///
/// By default only the rows changed by a commit range are checked, so the
/// tool can gate pull requests without re-auditing the whole dataset.
#[derive(Parser, Debug)]
#[command(name = "flaky-check")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter, e.g. `info` or `flaky_format_check=debug`.
    #[arg(long, env = "FLAKY_CHECK_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for flaky-check.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check dataset rows changed in a commit range.
    ///
    /// With no range, checks commits not yet pushed to the remote tracking
    /// branch plus uncommitted edits.
    Check(CheckArgs),

    /// Print each dataset's file name and expected header.
    Schemas,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Commit range: `BEFORE AFTER`, or `0000000000000000000000000000000000000000
    /// FIRST LAST` for the first push of a new branch.
    #[arg(value_name = "COMMIT")]
    pub range: Vec<String>,

    /// Check every row, ignoring history.
    #[arg(long, conflicts_with = "range")]
    pub all: bool,

    /// Directory holding the dataset files.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Config file (default: `.flaky-check.yaml` in --dir, if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Restrict the check to these datasets.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<SchemaKind>,

    /// Append an NDJSON record of the run to this file.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
