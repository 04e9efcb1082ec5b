//! `pr-data.csv`: flaky tests and the pull requests opened to fix them.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::common::{self, MODULE_PATH, PROJECT_URL, SHA_DETECTED, TEST_NAME};
use super::rules::{ColumnCheck, ColumnRule, CrossRule, SortKey, full_match};
use super::{Schema, SchemaKind};

pub const CATEGORY: &str = "Category";
pub const STATUS: &str = "Status";
pub const PR_LINK: &str = "PR Link";
pub const NOTES: &str = "Notes";

pub const COLUMNS: &[&str] = &[
    PROJECT_URL,
    SHA_DETECTED,
    MODULE_PATH,
    TEST_NAME,
    CATEGORY,
    STATUS,
    PR_LINK,
    NOTES,
];

/// Flakiness categories; a row may list several separated by `;`.
pub const CATEGORIES: &[&str] = &["OD", "OD-Brit", "OD-Vic", "ID", "NOD", "NDOD", "NDOI", "UD"];

pub const STATUSES: &[&str] = &[
    "",
    "Opened",
    "Accepted",
    "InspiredAFix",
    "DeveloperFixed",
    "Deleted",
    "Rejected",
    "Skipped",
];

/// Statuses that imply a pull request exists.
pub const STATUSES_WITH_PR: &[&str] = &["Accepted", "Opened", "Rejected"];

static CATEGORY_SHAPE: LazyLock<Regex> = LazyLock::new(|| full_match(r"(?:\w+|-|;)*\w+"));

/// A pull request in any GitHub repository.
pub static PR_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| full_match(r"https://github\.com/(?:[\w.-]+/)+pull/\d+"));

static OPTIONAL_PR_LINK: LazyLock<Regex> =
    LazyLock::new(|| full_match(r"(?:https://github\.com/(?:[\w.-]+/)+pull/\d+)?"));

static NOTES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    full_match(
        r"(?:https://github\.com/TestingResearchIllinois/(?:idoft|flaky-test-dataset)/issues/\d+)?",
    )
});

static PULL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/pull/\d+").expect("Invalid pull suffix regex"));

pub(super) fn schema() -> Schema {
    let mut column_rules = common::leading_rules();
    column_rules.extend([
        ColumnRule::new(
            CATEGORY,
            ColumnCheck::ListOf {
                shape: &CATEGORY_SHAPE,
                separator: ';',
                allowed: CATEGORIES,
            },
        ),
        ColumnRule::new(STATUS, ColumnCheck::OneOf(STATUSES)),
        ColumnRule::new(PR_LINK, ColumnCheck::Pattern(&OPTIONAL_PR_LINK)),
        ColumnRule::new(NOTES, ColumnCheck::Pattern(&NOTES_PATTERN)),
    ]);

    Schema {
        kind: SchemaKind::Pr,
        columns: COLUMNS,
        column_rules,
        cross_rules: vec![CrossRule::PrLinkMatchesProject, CrossRule::StatusAdvisories],
        sort_key: Some(SortKey { fields: &[0, 3] }),
    }
}

/// Repository URL a PR link points into (`.../owner/repo/pull/12` -> `.../owner/repo`).
pub fn pr_repository(pr_link: &str) -> String {
    PULL_SUFFIX.replace_all(pr_link, "").into_owned()
}

/// Returns true if a PR link belongs to the project, case-insensitively.
///
/// `renames` maps an old project URL to the URL the project moved to; links
/// into the new location are accepted for rows that still use the old one.
pub fn pr_link_matches_project(
    pr_link: &str,
    project_url: &str,
    renames: &BTreeMap<String, String>,
) -> bool {
    if !PR_LINK_PATTERN.is_match(pr_link) {
        return false;
    }

    let repository = pr_repository(pr_link).to_lowercase();
    if repository == project_url.to_lowercase() {
        return true;
    }

    renames
        .iter()
        .any(|(old, new)| old == project_url && repository == new.to_lowercase())
}

/// Advisory messages for a row's Status, Notes and PR Link combination.
pub fn status_advisories(status: &str, notes: &str, pr_link: &str) -> Vec<String> {
    let mut advisories = Vec::new();

    if matches!(status, "InspiredAFix" | "Skipped") {
        if notes.is_empty() {
            advisories.push(format!("Status {} should contain a note", status));
        }
        if status == "InspiredAFix" && !PR_LINK_PATTERN.is_match(pr_link) {
            advisories.push(format!("Status {} should have a PR Link", status));
        }
    }

    advisories
}
