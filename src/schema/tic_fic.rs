//! `tic-fic-data.csv`: the commit that introduced each flaky test (TIC) and
//! the commit that made it flaky (FIC).

use regex::Regex;
use std::sync::LazyLock;

use super::common::{
    self, MODULE_PATH, MODULE_PATH_PATTERN, PROJECT_URL, SHA_DETECTED, SHA_PATTERN, TEST_NAME,
    TEST_NAME_PATTERN,
};
use super::rules::{ColumnCheck, ColumnRule, full_match};
use super::{Schema, SchemaKind};

pub const TIC_EQ_FIC: &str = "TIC = FIC";
pub const TIC_SHA: &str = "Test-Introducing Commit SHA";
pub const TIC_TEST_NAME: &str = "Test-Introducing Commit Fully-Qualified Test Name";
pub const TIC_MODULE_PATH: &str = "Test-Introducing Commit Module Path";
pub const FIC_SHA: &str = "Flakiness-Introducing Commit SHA";
pub const FLAKY_TEST_FILE_MODIFIED: &str = "Flaky Test File Modified";
pub const OTHER_TEST_FILES_MODIFIED: &str = "Other Test Files Modified";
pub const CODE_UNDER_TEST_MODIFIED: &str = "Code Under Test Files Modified";
pub const BUILD_FILES_MODIFIED: &str = "Build Related Files Modified";
pub const COMMITS_MODIFYING_FLAKY_TEST: &str = "Commits Between TIC-FIC Modifying Flaky Test Class";
pub const COMMITS_MODIFYING_OTHER_TESTS: &str = "Commits Between TIC-FIC Modifying Other Test Files";
pub const COMMITS_MODIFYING_CODE_UNDER_TEST: &str =
    "Commits Between TIC-FIC Modifying Code Under Test Files";
pub const COMMITS_MODIFYING_BUILD_FILES: &str =
    "Commits Between TIC-FIC Modifying Build Related Files";
pub const COMMITS_BETWEEN: &str = "Commits Between TIC-FIC";
pub const DAYS_BETWEEN: &str = "Days Between TIC-FIC";

pub const COLUMNS: &[&str] = &[
    PROJECT_URL,
    SHA_DETECTED,
    MODULE_PATH,
    TEST_NAME,
    TIC_EQ_FIC,
    TIC_SHA,
    TIC_TEST_NAME,
    TIC_MODULE_PATH,
    FIC_SHA,
    FLAKY_TEST_FILE_MODIFIED,
    OTHER_TEST_FILES_MODIFIED,
    CODE_UNDER_TEST_MODIFIED,
    BUILD_FILES_MODIFIED,
    COMMITS_MODIFYING_FLAKY_TEST,
    COMMITS_MODIFYING_OTHER_TESTS,
    COMMITS_MODIFYING_CODE_UNDER_TEST,
    COMMITS_MODIFYING_BUILD_FILES,
    COMMITS_BETWEEN,
    DAYS_BETWEEN,
];

const MODIFIED_COLUMNS: &[&str] = &[
    FLAKY_TEST_FILE_MODIFIED,
    OTHER_TEST_FILES_MODIFIED,
    CODE_UNDER_TEST_MODIFIED,
    BUILD_FILES_MODIFIED,
];

const COMMIT_COUNT_COLUMNS: &[&str] = &[
    COMMITS_MODIFYING_FLAKY_TEST,
    COMMITS_MODIFYING_OTHER_TESTS,
    COMMITS_MODIFYING_CODE_UNDER_TEST,
    COMMITS_MODIFYING_BUILD_FILES,
    COMMITS_BETWEEN,
];

static OPTIONAL_BOOL: LazyLock<Regex> = LazyLock::new(|| full_match(r"TRUE|FALSE|"));
static OPTIONAL_COUNT: LazyLock<Regex> = LazyLock::new(|| full_match(r"\d+|"));
static OPTIONAL_DAYS: LazyLock<Regex> = LazyLock::new(|| full_match(r"\d+\.\d+|"));

pub(super) fn schema() -> Schema {
    let mut column_rules = common::leading_rules();
    column_rules.extend([
        ColumnRule::new(TIC_EQ_FIC, ColumnCheck::OneOf(&["TRUE", "FALSE"])),
        ColumnRule::new(TIC_SHA, ColumnCheck::Pattern(&SHA_PATTERN)),
        ColumnRule::new(TIC_TEST_NAME, ColumnCheck::Pattern(&TEST_NAME_PATTERN)),
        ColumnRule::new(TIC_MODULE_PATH, ColumnCheck::Pattern(&MODULE_PATH_PATTERN)),
        ColumnRule::new(FIC_SHA, ColumnCheck::Pattern(&SHA_PATTERN)),
    ]);
    column_rules.extend(
        MODIFIED_COLUMNS
            .iter()
            .copied()
            .map(|column| ColumnRule::new(column, ColumnCheck::Pattern(&OPTIONAL_BOOL))),
    );
    column_rules.extend(
        COMMIT_COUNT_COLUMNS
            .iter()
            .copied()
            .map(|column| ColumnRule::new(column, ColumnCheck::Pattern(&OPTIONAL_COUNT))),
    );
    column_rules.push(ColumnRule::new(DAYS_BETWEEN, ColumnCheck::Pattern(&OPTIONAL_DAYS)));

    Schema {
        kind: SchemaKind::TicFic,
        columns: COLUMNS,
        column_rules,
        cross_rules: Vec::new(),
        sort_key: None,
    }
}
