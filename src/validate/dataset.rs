//! Checking a whole dataset file.

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::changes::LineScope;
use crate::config::Config;
use crate::error::{CheckerError, Result};
use crate::schema::Schema;

use super::order::first_unordered_line;
use super::report::{Report, Violation};
use super::row::{Row, check_row, is_skipped};

/// Validate the contents of one dataset file.
///
/// # Arguments
///
/// * `schema` - Schema the file must follow
/// * `file` - File name used in findings
/// * `contents` - Full file text, header included
/// * `scope` - Lines whose rows are checked
/// * `config` - Renames and legacy allow-list
///
/// # Returns
///
/// * `Ok(Report)` - Findings for this file (possibly empty)
/// * `Err(CheckerError::UserError)` - The text is not readable as CSV
pub fn validate_dataset(
    schema: &Schema,
    file: &str,
    contents: &str,
    scope: &LineScope,
    config: &Config,
) -> Result<Report> {
    let mut report = Report::default();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(result) => result.map_err(|e| csv_error(file, e))?,
        None => StringRecord::new(),
    };

    if !schema.header_matches(header.iter()) {
        report.violations.push(Violation::Header {
            file: file.to_string(),
            found: header.iter().map(str::to_string).collect(),
        });
        return Ok(report);
    }

    if scope.is_empty() {
        info!("On file {}: There are no changes to be checked", file);
        return Ok(report);
    }

    for result in records {
        let record = result.map_err(|e| csv_error(file, e))?;
        let (line, end) = line_span(&record);

        if !scope.includes_any(line, end) {
            continue;
        }

        let row = Row::new(schema, &record, line);
        if is_skipped(schema, &row, config) {
            debug!(file = %file, line, "skipping allow-listed legacy row");
            continue;
        }

        check_row(schema, file, &row, header.len(), config, &mut report);
        report.rows_checked += 1;
    }

    if let Some(key) = schema.sort_key {
        if let Some(line) = first_unordered_line(contents, key) {
            report.violations.push(Violation::Order {
                file: file.to_string(),
                line,
            });
        }
    }

    Ok(report)
}

/// First and last physical line of a record.
///
/// Quoted fields may hold newlines, carrying the record onto later lines.
fn line_span(record: &StringRecord) -> (usize, usize) {
    let first = record.position().map_or(0, |p| p.line() as usize);
    let embedded: usize = record.iter().map(|field| field.matches('\n').count()).sum();
    (first, first + embedded)
}

fn csv_error(file: &str, e: csv::Error) -> CheckerError {
    CheckerError::UserError(format!("failed to parse '{}' as CSV: {}", file, e))
}
