//! Violations, warnings and the per-run report.

use serde::Serialize;
use std::fmt;

/// A finding that fails the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The header is not the expected column list.
    Header { file: String, found: Vec<String> },
    /// A field does not satisfy its column rule.
    Field {
        file: String,
        line: usize,
        column: String,
        value: String,
    },
    /// A row has a different number of fields than the header.
    RowLength {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The file is not sorted; `line` is the first line out of place.
    Order { file: String, line: usize },
}

impl Violation {
    pub fn field(
        file: impl Into<String>,
        line: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Violation::Field {
            file: file.into(),
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Header { file, .. } => {
                write!(f, "On file {}: The header is improperly formatted", file)
            }
            Violation::Field {
                file,
                line,
                column,
                value,
            } => write!(f, "On file {}, row {}: Invalid {}: \"{}\"", file, line, column, value),
            Violation::RowLength {
                file,
                line,
                expected,
                found,
            } => write!(
                f,
                "On file {}, row {}: Invalid row length: expected {} fields, found {}",
                file, line, expected, found
            ),
            Violation::Order { file, line } => write!(
                f,
                "On file {}: The file is not properly ordered (first out of place at row {})",
                file, line
            ),
        }
    }
}

/// An advisory finding; fails the run only with `warnings_as_errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub file: String,
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "On file {}, row {}: {}", self.file, self.line, self.message)
    }
}

/// Everything found while checking one file or a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub violations: Vec<Violation>,
    pub warnings: Vec<Warning>,
    /// Data rows that were in scope and checked.
    pub rows_checked: usize,
}

impl Report {
    /// Fold another report into this one.
    pub fn merge(&mut self, other: Report) {
        self.violations.extend(other.violations);
        self.warnings.extend(other.warnings);
        self.rows_checked += other.rows_checked;
    }

    /// Number of findings that count against the run.
    pub fn error_count(&self, warnings_as_errors: bool) -> usize {
        if warnings_as_errors {
            self.violations.len() + self.warnings.len()
        } else {
            self.violations.len()
        }
    }

    /// Returns true if the run should exit with a failure status.
    pub fn is_failure(&self, warnings_as_errors: bool) -> bool {
        self.error_count(warnings_as_errors) > 0
    }

    pub(super) fn warn(&mut self, file: &str, line: usize, message: impl Into<String>) {
        self.warnings.push(Warning {
            file: file.to_string(),
            line,
            message: message.into(),
        });
    }
}
