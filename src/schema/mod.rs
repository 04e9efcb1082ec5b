//! Dataset schemas.
//!
//! Each dataset file has a fixed, ordered header and a rule per column.
//! Column names are exposed as constants so rules and cross-column checks
//! refer to them by name rather than by string literal.

pub mod common;
pub mod pr;
mod rules;
pub mod tic_fic;
pub mod tso_iso;

#[cfg(test)]
mod tests;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use rules::{ColumnCheck, ColumnRule, CrossRule, SortKey};

/// The three dataset files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// `pr-data.csv`: flaky tests and the fixes opened for them.
    Pr,
    /// `tic-fic-data.csv`: test- and flakiness-introducing commits.
    TicFic,
    /// `tso-iso-rates.csv`: test-suite-order vs. isolation run statistics.
    TsoIso,
}

impl SchemaKind {
    /// All schemas, in the order they are checked.
    pub const ALL: [SchemaKind; 3] = [SchemaKind::Pr, SchemaKind::TicFic, SchemaKind::TsoIso];

    /// File name of the dataset in the repository root.
    pub fn default_file_name(self) -> &'static str {
        match self {
            SchemaKind::Pr => "pr-data.csv",
            SchemaKind::TicFic => "tic-fic-data.csv",
            SchemaKind::TsoIso => "tso-iso-rates.csv",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Pr => write!(f, "pr"),
            SchemaKind::TicFic => write!(f, "tic_fic"),
            SchemaKind::TsoIso => write!(f, "tso_iso"),
        }
    }
}

/// Column layout and rules for one dataset file.
#[derive(Debug)]
pub struct Schema {
    pub kind: SchemaKind,
    /// Expected header, in order.
    pub columns: &'static [&'static str],
    /// Single-column checks, applied in order.
    pub column_rules: Vec<ColumnRule>,
    /// Checks that relate several columns of the same row.
    pub cross_rules: Vec<CrossRule>,
    /// Ordering the whole file must follow, if any.
    pub sort_key: Option<SortKey>,
}

impl Schema {
    /// Build the schema for a dataset.
    pub fn for_kind(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::Pr => pr::schema(),
            SchemaKind::TicFic => tic_fic::schema(),
            SchemaKind::TsoIso => tso_iso::schema(),
        }
    }

    /// Position of a column in the header.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }

    /// Returns true if `header` is exactly the expected column list.
    pub fn header_matches<'a, I>(&self, header: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        header.into_iter().eq(self.columns.iter().copied())
    }
}
