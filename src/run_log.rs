//! NDJSON run records.
//!
//! `check --report <path>` appends one JSON object per run so CI systems can
//! archive results alongside the log output.
//!
//! # Record Format
//!
//! - `ts`: RFC3339 timestamp
//! - `actor`: `user@HOST`
//! - `range`: the commit range checked (`all` for a full audit)
//! - `schemas`: datasets checked
//! - `rows_checked`, `error_count`, `warning_count`, `passed`
//! - `violations`: every violation, tagged by `kind`

use crate::error::{CheckerError, Result};
use crate::schema::SchemaKind;
use crate::validate::{Report, Violation};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Summary of one checker run.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// RFC3339 timestamp when the run finished.
    pub ts: DateTime<Utc>,
    /// Who ran the check (e.g., `user@HOST`).
    pub actor: String,
    pub range: String,
    pub schemas: Vec<SchemaKind>,
    pub rows_checked: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub passed: bool,
    pub violations: Vec<Violation>,
}

impl RunRecord {
    /// Summarize a finished run.
    pub fn new(
        range: impl Into<String>,
        schemas: &[SchemaKind],
        report: &Report,
        warnings_as_errors: bool,
    ) -> Self {
        Self {
            ts: Utc::now(),
            actor: get_actor_string(),
            range: range.into(),
            schemas: schemas.to_vec(),
            rows_checked: report.rows_checked,
            error_count: report.error_count(warnings_as_errors),
            warning_count: report.warnings.len(),
            passed: !report.is_failure(warnings_as_errors),
            violations: report.violations.clone(),
        }
    }

    /// Serialize the record to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            CheckerError::UserError(format!("failed to serialize run record to JSON: {}", e))
        })
    }
}

/// Get the actor string for record metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append a record to the NDJSON file at `path`, creating it if needed.
pub fn append_run_record<P: AsRef<Path>>(path: P, record: &RunRecord) -> Result<()> {
    let path = path.as_ref();
    let line = record.to_ndjson_line()?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            CheckerError::UserError(format!(
                "failed to open report file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line).map_err(|e| {
        CheckerError::UserError(format!(
            "failed to write report file '{}': {}",
            path.display(),
            e
        ))
    })
}
