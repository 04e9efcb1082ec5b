//! Public types for change-set resolution.

use crate::error::Result;
use std::collections::BTreeSet;
use std::path::Path;

use super::range::CommitRange;

/// Line numbers (1-based) of a file that were touched by a commit range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Lines last touched by a commit inside the range.
    pub committed: BTreeSet<usize>,
    /// Lines with working-tree modifications not yet committed.
    pub uncommitted: BTreeSet<usize>,
}

impl ChangeSet {
    /// Build a change set from explicit line lists.
    pub fn new(
        committed: impl IntoIterator<Item = usize>,
        uncommitted: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            committed: committed.into_iter().collect(),
            uncommitted: uncommitted.into_iter().collect(),
        }
    }

    /// Returns true if the line is in either set.
    pub fn contains(&self, line: usize) -> bool {
        self.committed.contains(&line) || self.uncommitted.contains(&line)
    }

    /// Returns true if no line was touched.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.uncommitted.is_empty()
    }

    /// Number of distinct lines touched.
    pub fn len(&self) -> usize {
        self.committed.union(&self.uncommitted).count()
    }
}

/// Which lines of a file a check applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineScope {
    /// Every line (full-file audit).
    All,
    /// Only the lines in the change set.
    Changed(ChangeSet),
}

impl LineScope {
    /// Returns true if the given 1-based line should be checked.
    pub fn includes(&self, line: usize) -> bool {
        match self {
            LineScope::All => true,
            LineScope::Changed(changes) => changes.contains(line),
        }
    }

    /// Returns true if any line in `first..=last` should be checked.
    pub fn includes_any(&self, first: usize, last: usize) -> bool {
        (first..=last).any(|line| self.includes(line))
    }

    /// Returns true if nothing at all is in scope.
    pub fn is_empty(&self) -> bool {
        match self {
            LineScope::All => false,
            LineScope::Changed(changes) => changes.is_empty(),
        }
    }
}

/// Resolves the changed lines of a file for a commit range.
///
/// The git-backed implementation is [`GitBlameResolver`](super::GitBlameResolver);
/// tests substitute an in-memory fake.
pub trait ChangeSetResolver {
    /// Return the committed and uncommitted line sets of `file` for `range`.
    fn changed_lines(&self, file: &Path, range: &CommitRange) -> Result<ChangeSet>;
}
