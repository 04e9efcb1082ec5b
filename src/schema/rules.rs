//! Rule primitives shared by all schemas.

use regex::Regex;

/// Predicate applied to a single field value.
#[derive(Debug, Clone, Copy)]
pub enum ColumnCheck {
    /// The whole value must match the (anchored) regex.
    Pattern(&'static Regex),
    /// The value must be one of the listed strings.
    OneOf(&'static [&'static str]),
    /// The value must match `shape`, and every `separator`-delimited item
    /// must be one of `allowed`.
    ListOf {
        shape: &'static Regex,
        separator: char,
        allowed: &'static [&'static str],
    },
}

impl ColumnCheck {
    /// Returns true if `value` satisfies the check.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ColumnCheck::Pattern(regex) => regex.is_match(value),
            ColumnCheck::OneOf(allowed) => allowed.contains(&value),
            ColumnCheck::ListOf {
                shape,
                separator,
                allowed,
            } => shape.is_match(value) && value.split(*separator).all(|item| allowed.contains(&item)),
        }
    }
}

/// A check bound to a named column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub column: &'static str,
    pub check: ColumnCheck,
}

impl ColumnRule {
    pub const fn new(column: &'static str, check: ColumnCheck) -> Self {
        Self { column, check }
    }
}

/// Row-level rules that compare several columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossRule {
    /// Accepted/Opened/Rejected rows need a PR Link into the row's project.
    PrLinkMatchesProject,
    /// InspiredAFix/Skipped rows should carry notes (and a link for
    /// InspiredAFix). Reported as warnings.
    StatusAdvisories,
}

/// File ordering in the manner of `LC_ALL=C sort -t, -k<f>,<f>... -f`.
///
/// Fields are split on raw commas; keys are compared ASCII case-folded,
/// then whole lines byte-wise as a tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Zero-based field positions, most significant first.
    pub fields: &'static [usize],
}

/// Compile a pattern that must match the whole value.
pub(crate) fn full_match(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("Invalid schema pattern")
}
