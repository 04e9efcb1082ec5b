//! Per-row rule dispatch.

use csv::StringRecord;

use crate::config::Config;
use crate::schema::common::{PROJECT_URL, TEST_NAME};
use crate::schema::pr::{self, NOTES, PR_LINK, STATUS, STATUSES_WITH_PR};
use crate::schema::{CrossRule, Schema};

use super::report::{Report, Violation};

/// One data row, with fields addressed by column name.
pub(super) struct Row<'a> {
    schema: &'a Schema,
    record: &'a StringRecord,
    pub line: usize,
}

impl<'a> Row<'a> {
    pub(super) fn new(schema: &'a Schema, record: &'a StringRecord, line: usize) -> Self {
        Self {
            schema,
            record,
            line,
        }
    }

    /// Field value by column name; missing fields read as empty.
    pub(super) fn get(&self, column: &str) -> &'a str {
        self.schema
            .column_index(column)
            .and_then(|i| self.record.get(i))
            .unwrap_or("")
    }

    fn has(&self, column: &str) -> bool {
        self.schema
            .column_index(column)
            .is_some_and(|i| i < self.record.len())
    }

    pub(super) fn len(&self) -> usize {
        self.record.len()
    }
}

/// Run every check of the schema against one row.
///
/// Columns missing from a short row are covered by the row-length violation
/// and are not checked individually.
pub(super) fn check_row(
    schema: &Schema,
    file: &str,
    row: &Row<'_>,
    expected_len: usize,
    config: &Config,
    report: &mut Report,
) {
    if row.len() != expected_len {
        report.violations.push(Violation::RowLength {
            file: file.to_string(),
            line: row.line,
            expected: expected_len,
            found: row.len(),
        });
    }

    for rule in &schema.column_rules {
        if !row.has(rule.column) {
            continue;
        }
        let value = row.get(rule.column);
        if !rule.check.matches(value) {
            report
                .violations
                .push(Violation::field(file, row.line, rule.column, value));
        }
    }

    for rule in &schema.cross_rules {
        apply_cross_rule(*rule, file, row, config, report);
    }
}

fn apply_cross_rule(rule: CrossRule, file: &str, row: &Row<'_>, config: &Config, report: &mut Report) {
    match rule {
        CrossRule::PrLinkMatchesProject => {
            let status = row.get(STATUS);
            if !STATUSES_WITH_PR.contains(&status) {
                return;
            }
            let pr_link = row.get(PR_LINK);
            // A malformed link was already reported by the column rule.
            if !pr_link.is_empty() && !pr::PR_LINK_PATTERN.is_match(pr_link) {
                return;
            }
            if !pr::pr_link_matches_project(pr_link, row.get(PROJECT_URL), &config.project_renames) {
                report
                    .violations
                    .push(Violation::field(file, row.line, PR_LINK, pr_link));
            }
        }
        CrossRule::StatusAdvisories => {
            for message in pr::status_advisories(row.get(STATUS), row.get(NOTES), row.get(PR_LINK)) {
                report.warn(file, row.line, message);
            }
        }
    }
}

/// Returns true if the row is exempt through the config allow-list.
pub(super) fn is_skipped(schema: &Schema, row: &Row<'_>, config: &Config) -> bool {
    config.is_skipped_row(schema.kind, row.get(PROJECT_URL), row.get(TEST_NAME))
}
