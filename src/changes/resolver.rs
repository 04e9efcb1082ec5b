//! Git-backed change-set resolution.

use crate::error::Result;
use crate::git::{blame_porcelain, current_branch, log_short_hashes};
use std::path::{Path, PathBuf};

use super::api::{ChangeSet, ChangeSetResolver};
use super::parser::parse_blame_porcelain;
use super::range::{CommitRange, SHORT_HASH_LEN};

/// Resolves changed lines with `git log` and `git blame`.
#[derive(Debug, Clone)]
pub struct GitBlameResolver {
    repo_dir: PathBuf,
    remote: String,
}

impl GitBlameResolver {
    /// Create a resolver for the checkout at `repo_dir`.
    ///
    /// `remote` names the tracking remote used for [`CommitRange::Local`].
    pub fn new(repo_dir: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            remote: remote.into(),
        }
    }

    /// Turn a commit range into the list of abbreviated hashes it contains.
    pub fn commit_list(&self, range: &CommitRange) -> Result<Vec<String>> {
        match range {
            CommitRange::Local => {
                let branch = current_branch(&self.repo_dir)?;
                let upstream = format!("{}/{}", self.remote, branch);
                log_short_hashes(&self.repo_dir, &upstream, "HEAD")
            }
            CommitRange::Explicit { before, after } => {
                log_short_hashes(&self.repo_dir, before, after)
            }
            CommitRange::NewBranch { first, last } => {
                let head: String = first.chars().take(SHORT_HASH_LEN).collect();
                let mut commits = vec![head];
                commits.extend(log_short_hashes(&self.repo_dir, first, last)?);
                Ok(commits)
            }
        }
    }
}

impl ChangeSetResolver for GitBlameResolver {
    fn changed_lines(&self, file: &Path, range: &CommitRange) -> Result<ChangeSet> {
        let commits = self.commit_list(range)?;
        tracing::debug!(range = %range, commits = commits.len(), "resolved commit list");

        let blame = blame_porcelain(&self.repo_dir, &file.to_string_lossy())?;
        let attributions = parse_blame_porcelain(&blame);

        Ok(classify_lines(&attributions, &commits))
    }
}

/// Split blamed lines into committed-in-range and uncommitted sets.
pub(super) fn classify_lines(
    attributions: &[super::parser::BlameLine],
    commits: &[String],
) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for line in attributions {
        if line.is_uncommitted() {
            changes.uncommitted.insert(line.line_number);
        } else if commits
            .iter()
            .any(|short| !short.is_empty() && line.commit.starts_with(short.as_str()))
        {
            changes.committed.insert(line.line_number);
        }
    }

    changes
}
