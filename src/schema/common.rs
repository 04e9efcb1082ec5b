//! Columns and patterns shared by every dataset.

use regex::Regex;
use std::sync::LazyLock;

use super::rules::{ColumnCheck, ColumnRule, full_match};

pub const PROJECT_URL: &str = "Project URL";
pub const SHA_DETECTED: &str = "SHA Detected";
pub const MODULE_PATH: &str = "Module Path";
pub const TEST_NAME: &str = "Fully-Qualified Test Name (packageName.ClassName.methodName)";

/// `https://github.com/<owner>/<repo>`.
pub static PROJECT_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| full_match(r"https://github\.com(?:/[\w.-]+){2}"));

/// Full 40-character lowercase commit hash.
pub static SHA_PATTERN: LazyLock<Regex> = LazyLock::new(|| full_match(r"[0-9a-f]{40}"));

/// Relative module directory; empty for single-module projects.
pub static MODULE_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| full_match(r"(?:[\w.-]+[/\w.-]*)?"));

/// `package.Class.method`, optionally with a `[parameter]` suffix.
///
/// Whitespace is tolerated in package segments; at least one project in the
/// dataset has a space in its test package name.
pub static TEST_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    full_match(r"(?:[\w\s]+\.)+(?:\w+|\d+|\W+)+(?:\[(?:\d+|[\w\s]+)\])?")
});

/// Rules for the four leading columns every dataset starts with.
pub fn leading_rules() -> Vec<ColumnRule> {
    vec![
        ColumnRule::new(PROJECT_URL, ColumnCheck::Pattern(&PROJECT_URL_PATTERN)),
        ColumnRule::new(SHA_DETECTED, ColumnCheck::Pattern(&SHA_PATTERN)),
        ColumnRule::new(MODULE_PATH, ColumnCheck::Pattern(&MODULE_PATH_PATTERN)),
        ColumnRule::new(TEST_NAME, ColumnCheck::Pattern(&TEST_NAME_PATTERN)),
    ]
}
