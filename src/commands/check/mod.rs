//! Implementation of the `flaky-check check` command.
//!
//! # Steps
//!
//! 1. Load config (`--config`, or `.flaky-check.yaml` in `--dir`)
//! 2. Resolve the commit range (unless `--all`)
//! 3. For each dataset: resolve changed lines, validate, log findings
//! 4. Optionally append an NDJSON run record
//! 5. Fail with the total error count if anything was found


use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::changes::{ChangeSet, ChangeSetResolver, CommitRange, GitBlameResolver, LineScope};
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{CheckerError, Result};
use crate::git::get_repo_root;
use crate::run_log::{RunRecord, append_run_record};
use crate::schema::{Schema, SchemaKind};
use crate::validate::{Report, validate_dataset};

/// Execute the `check` command.
///
/// # Exit Codes
///
/// - 0: No violations
/// - 1: One or more violations logged
/// - 2: User error (bad range, missing file, invalid config)
/// - 3: Git error
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&args.dir)?,
    };

    let kinds = selected_kinds(&args.only);

    let range = if args.all {
        None
    } else {
        let range = CommitRange::from_args(&args.range)?;
        get_repo_root(&args.dir)?;
        Some(range)
    };

    let resolver = GitBlameResolver::new(&args.dir, &config.remote);
    let report = run_checks(&kinds, &args.dir, range.as_ref(), &resolver, &config)?;

    if let Some(path) = &args.report {
        let label = range.as_ref().map_or_else(|| "all".to_string(), |r| r.to_string());
        let record = RunRecord::new(label, &kinds, &report, config.warnings_as_errors);
        append_run_record(path, &record)?;
    }

    finish(&report, config.warnings_as_errors)
}

/// Check each dataset and merge the findings.
///
/// `range` of `None` checks every row; otherwise only lines the resolver
/// reports as changed. Every file is read and resolved before any is
/// validated, and nothing is logged unless all files were checked.
pub(crate) fn run_checks(
    kinds: &[SchemaKind],
    dir: &Path,
    range: Option<&CommitRange>,
    resolver: &dyn ChangeSetResolver,
    config: &Config,
) -> Result<Report> {
    let mut inputs = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let file = config.files.for_kind(kind);
        let path = dir.join(file);

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            CheckerError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        let scope = match range {
            None => LineScope::All,
            Some(range) => {
                let changes: ChangeSet = resolver.changed_lines(Path::new(file), range)?;
                debug!(file = %file, lines = changes.len(), "resolved changed lines");
                LineScope::Changed(changes)
            }
        };

        inputs.push((kind, file, contents, scope));
    }

    let reports = inputs
        .iter()
        .map(|(kind, file, contents, scope)| {
            validate_dataset(&Schema::for_kind(*kind), file, contents, scope, config)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut total = Report::default();
    for report in reports {
        log_report(&report);
        total.merge(report);
    }

    Ok(total)
}

fn log_report(report: &Report) {
    for violation in &report.violations {
        error!("{}", violation);
    }
    for warning in &report.warnings {
        warn!("{}", warning);
    }
}

fn finish(report: &Report, warnings_as_errors: bool) -> Result<()> {
    if report.is_failure(warnings_as_errors) {
        Err(CheckerError::ViolationsFound(
            report.error_count(warnings_as_errors),
        ))
    } else {
        info!("Success: 0 logged errors");
        Ok(())
    }
}

/// Datasets to check, in canonical order and without duplicates.
fn selected_kinds(only: &[SchemaKind]) -> Vec<SchemaKind> {
    SchemaKind::ALL
        .into_iter()
        .filter(|kind| only.is_empty() || only.contains(kind))
        .collect()
}
