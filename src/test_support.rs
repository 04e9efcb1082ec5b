use crate::changes::{ChangeSet, ChangeSetResolver, CommitRange};
use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Change-set resolver that answers from a fixed per-file table.
///
/// Files with no entry resolve to an empty change set.
#[derive(Debug, Default)]
pub(crate) struct FakeResolver {
    changes: HashMap<PathBuf, ChangeSet>,
}

impl FakeResolver {
    pub(crate) fn with_file(mut self, file: impl Into<PathBuf>, changes: ChangeSet) -> Self {
        self.changes.insert(file.into(), changes);
        self
    }
}

impl ChangeSetResolver for FakeResolver {
    fn changed_lines(&self, file: &Path, _range: &CommitRange) -> Result<ChangeSet> {
        Ok(self.changes.get(file).cloned().unwrap_or_default())
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    create_repo(CreateRepoOptions {
        add_origin_remote: false,
    })
}

/// Repo whose `origin` remote points at itself, with `origin/main` fetched.
pub(crate) fn create_test_repo_with_remote() -> TempDir {
    create_repo(CreateRepoOptions {
        add_origin_remote: true,
    })
}

struct CreateRepoOptions {
    add_origin_remote: bool,
}

fn create_repo(opts: CreateRepoOptions) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    if opts.add_origin_remote {
        let path_str = path.to_string_lossy().to_string();
        git(path, &["remote", "add", "origin", &path_str]);
        git(path, &["fetch", "origin"]);
    }

    temp_dir
}

/// Write `content` to `name` inside the repo and commit it.
pub(crate) fn commit_file(repo_dir: &Path, name: &str, content: &str, message: &str) {
    std::fs::write(repo_dir.join(name), content).unwrap();
    git(repo_dir, &["add", name]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Full hash of `HEAD`.
pub(crate) fn head_sha(repo_dir: &Path) -> String {
    git(repo_dir, &["rev-parse", "HEAD"])
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
