//! Commit range parsing.

use crate::error::{CheckerError, Result};
use std::fmt;

/// Hash git and CI systems report as the "before" commit of a new branch.
pub(crate) const ZERO_HASH: &str = "0000000000000000000000000000000000000000";

/// Length of the short hash prepended for a new branch's first commit.
pub(crate) const SHORT_HASH_LEN: usize = 7;

/// The commits whose changes should be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// Unpushed local commits: `<remote>/<current-branch>..HEAD`.
    Local,
    /// Commits in `before..after`.
    Explicit { before: String, after: String },
    /// First push of a branch with no prior history: `first` itself plus
    /// everything in `first..last`.
    NewBranch { first: String, last: String },
}

impl CommitRange {
    /// Parse the positional range arguments given on the command line.
    ///
    /// - no arguments: [`CommitRange::Local`]
    /// - `BEFORE AFTER [..]`: [`CommitRange::Explicit`]
    /// - `0{40} FIRST LAST`: [`CommitRange::NewBranch`]
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [] => Ok(CommitRange::Local),
            [before, rest @ ..] if is_zero_hash(before) => match rest {
                [first, last, ..] => Ok(CommitRange::NewBranch {
                    first: first.clone(),
                    last: last.clone(),
                }),
                _ => Err(CheckerError::UserError(
                    "a range starting with the zero hash needs the first and last commit \
                     of the push: <0000...> <FIRST> <LAST>"
                        .to_string(),
                )),
            },
            [before, after, ..] => Ok(CommitRange::Explicit {
                before: before.clone(),
                after: after.clone(),
            }),
            [single] => Err(CheckerError::UserError(format!(
                "incomplete commit range '{}': expected <BEFORE> <AFTER>",
                single
            ))),
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitRange::Local => write!(f, "local"),
            CommitRange::Explicit { before, after } => write!(f, "{}..{}", before, after),
            CommitRange::NewBranch { first, last } => write!(f, "new branch {}..{}", first, last),
        }
    }
}

/// Returns true for the 40-character all-zero hash.
pub(crate) fn is_zero_hash(hash: &str) -> bool {
    hash.len() == ZERO_HASH.len() && hash.bytes().all(|b| b == b'0')
}
