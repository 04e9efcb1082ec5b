//! Row validation for dataset files.
//!
//! Checks one dataset file against its schema:
//! - Header: must equal the expected column list, otherwise the file is not
//!   checked further
//! - Rows: only rows whose line is in the [`LineScope`](crate::changes::LineScope)
//!   are checked for length, column patterns and cross-column rules
//! - Ordering: files with a sort key must be sorted as a whole
//!
//! Findings are returned as a [`Report`]; nothing here logs a violation.

mod dataset;
mod order;
mod report;
mod row;


pub use dataset::validate_dataset;
pub use order::first_unordered_line;
pub use report::{Report, Violation, Warning};
