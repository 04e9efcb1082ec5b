//! Git command runner for flaky-check.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. All git operations go through this module.

use crate::error::{CheckerError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(CheckerError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    tracing::debug!(cwd = %cwd.display(), "git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            CheckerError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(CheckerError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Not being inside a repository is reported as a user error rather than a
/// git failure, since the fix is to run from the right directory.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(&output.stdout)),
        Err(CheckerError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(CheckerError::UserError(format!(
                "'{}' is not inside a git repository.\n\
                 Run from the dataset checkout, or pass --all to audit files without history.",
                cwd.display()
            )))
        }
        Err(e) => Err(e),
    }
}

/// Get the name of the currently checked-out branch.
///
/// Returns `HEAD` when the checkout is detached.
pub fn current_branch<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let output = run_git(cwd, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(output.stdout)
}

/// List abbreviated hashes of the commits reachable from `to` but not `from`.
///
/// Equivalent to `git log --format=%h from..to`, newest first.
pub fn log_short_hashes<P: AsRef<Path>>(cwd: P, from: &str, to: &str) -> Result<Vec<String>> {
    let range = format!("{}..{}", from, to);
    let output = run_git(cwd, &["log", "--format=%h", &range])?;
    Ok(output.lines().into_iter().map(str::to_string).collect())
}

/// Run `git blame --porcelain` on a file and return the raw output.
pub fn blame_porcelain<P: AsRef<Path>>(cwd: P, file: &str) -> Result<String> {
    let output = run_git(cwd, &["blame", "--porcelain", "--", file])?;
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_file, create_test_repo};
    use tempfile::TempDir;

    #[test]
    fn test_run_git_success() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["status", "--porcelain"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["checkout", "nonexistent-branch"]);
        let err = result.unwrap_err();
        assert!(matches!(err, CheckerError::GitError(_)));
    }

    #[test]
    fn test_get_repo_root_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("data").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = get_repo_root(&subdir).unwrap();
        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(root.canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_get_repo_root_outside_repo_returns_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = get_repo_root(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CheckerError::UserError(_)));
        assert!(err.to_string().contains("not inside a git repository"));
    }

    #[test]
    fn test_current_branch_is_main() {
        let temp_dir = create_test_repo();
        assert_eq!(current_branch(temp_dir.path()).unwrap(), "main");
    }

    #[test]
    fn test_log_short_hashes_lists_range_newest_first() {
        let temp_dir = create_test_repo();
        let base = run_git(temp_dir.path(), &["rev-parse", "HEAD"]).unwrap().stdout;
        commit_file(temp_dir.path(), "a.txt", "a\n", "add a");
        commit_file(temp_dir.path(), "b.txt", "b\n", "add b");
        let head = run_git(temp_dir.path(), &["rev-parse", "HEAD"]).unwrap().stdout;

        let hashes = log_short_hashes(temp_dir.path(), &base, "HEAD").unwrap();
        assert_eq!(hashes.len(), 2);
        assert!(head.starts_with(&hashes[0]));
    }

    #[test]
    fn test_log_short_hashes_empty_range() {
        let temp_dir = create_test_repo();
        let hashes = log_short_hashes(temp_dir.path(), "HEAD", "HEAD").unwrap();
        assert!(hashes.is_empty());
    }

    #[test]
    fn test_blame_untracked_file_fails() {
        let temp_dir = create_test_repo();
        std::fs::write(temp_dir.path().join("new.csv"), "x\n").unwrap();
        let err = blame_porcelain(temp_dir.path(), "new.csv").unwrap_err();
        assert!(matches!(err, CheckerError::GitError(_)));
    }

    #[test]
    fn test_git_output_lines() {
        let output = GitOutput {
            stdout: "line1\nline2\nline3".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.lines(), vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_git_output_lines_empty() {
        let output = GitOutput {
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(output.lines().is_empty());
    }
}
