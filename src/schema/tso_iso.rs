//! `tso-iso-rates.csv`: pass/fail rates of each flaky test when run in the
//! test-suite order (TSO) and in isolation (ISO).

use regex::Regex;
use std::sync::LazyLock;

use super::common::{self, MODULE_PATH, PROJECT_URL, SHA_DETECTED, TEST_NAME};
use super::rules::{ColumnCheck, ColumnRule, full_match};
use super::{Schema, SchemaKind};

pub const TSO_FAILURES: &str = "Number Of Test Failures In Test Suite";
pub const TSO_RUNS: &str = "Number Of Test Runs In Test Suite";
pub const P_VALUE: &str = "P-Value";
pub const LESS_OR_GREATER: &str = "Is P-Value Less Or Greater Than 0.05";
pub const TSO_TOTAL_RUNS: &str = "Total Runs In Test Suite";
pub const TSO_PASSES: &str = "Number of Times Test Passed In Test Suite";
pub const ISO_TOTAL_RUNS: &str = "Total Runs In Isolation";
pub const ISO_PASSES: &str = "Number of Times Test Passed In Isolation";

pub const COLUMNS: &[&str] = &[
    PROJECT_URL,
    SHA_DETECTED,
    MODULE_PATH,
    TEST_NAME,
    TSO_FAILURES,
    TSO_RUNS,
    P_VALUE,
    LESS_OR_GREATER,
    TSO_TOTAL_RUNS,
    TSO_PASSES,
    ISO_TOTAL_RUNS,
    ISO_PASSES,
];

/// Per-round counts, e.g. `(3;0;12)`.
static ROUND_COUNTS: LazyLock<Regex> = LazyLock::new(|| full_match(r"\((?:\d+;)+\d+\)"));
static P_VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| full_match(r"\d(?:\.\d+(?:E-\d+)?)?"));
static COUNT: LazyLock<Regex> = LazyLock::new(|| full_match(r"\d+"));

pub(super) fn schema() -> Schema {
    let mut column_rules = common::leading_rules();
    column_rules.extend([
        ColumnRule::new(TSO_FAILURES, ColumnCheck::Pattern(&ROUND_COUNTS)),
        ColumnRule::new(TSO_RUNS, ColumnCheck::Pattern(&ROUND_COUNTS)),
        ColumnRule::new(P_VALUE, ColumnCheck::Pattern(&P_VALUE_PATTERN)),
        ColumnRule::new(LESS_OR_GREATER, ColumnCheck::OneOf(&["less", "greater"])),
        ColumnRule::new(TSO_TOTAL_RUNS, ColumnCheck::Pattern(&COUNT)),
        ColumnRule::new(TSO_PASSES, ColumnCheck::Pattern(&COUNT)),
        ColumnRule::new(ISO_TOTAL_RUNS, ColumnCheck::Pattern(&COUNT)),
        ColumnRule::new(ISO_PASSES, ColumnCheck::Pattern(&COUNT)),
    ]);

    Schema {
        kind: SchemaKind::TsoIso,
        columns: COLUMNS,
        column_rules,
        cross_rules: Vec::new(),
        sort_key: None,
    }
}
