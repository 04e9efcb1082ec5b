//! Tests for dataset schemas.

use super::common::{MODULE_PATH_PATTERN, PROJECT_URL_PATTERN, SHA_PATTERN, TEST_NAME_PATTERN};
use super::{ColumnCheck, Schema, SchemaKind, pr, tic_fic, tso_iso};
use std::collections::BTreeMap;

fn check_for(kind: SchemaKind, column: &str) -> ColumnCheck {
    Schema::for_kind(kind)
        .column_rules
        .iter()
        .find(|rule| rule.column == column)
        .map(|rule| rule.check)
        .unwrap_or_else(|| panic!("no rule for column {}", column))
}

fn dubbo_renames() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "https://github.com/apache/incubator-dubbo".to_string(),
        "https://github.com/apache/dubbo".to_string(),
    )])
}

// =========================================================================
// Schema shape
// =========================================================================

#[test]
fn test_every_rule_targets_a_known_column() {
    for kind in SchemaKind::ALL {
        let schema = Schema::for_kind(kind);
        for rule in &schema.column_rules {
            assert!(
                schema.column_index(rule.column).is_some(),
                "{} rule targets unknown column '{}'",
                kind,
                rule.column
            );
        }
    }
}

#[test]
fn test_every_column_has_a_rule() {
    for kind in SchemaKind::ALL {
        let schema = Schema::for_kind(kind);
        for column in schema.columns {
            assert!(
                schema.column_rules.iter().any(|rule| rule.column == *column),
                "{} column '{}' has no rule",
                kind,
                column
            );
        }
    }
}

#[test]
fn test_schemas_share_leading_columns() {
    for kind in SchemaKind::ALL {
        let schema = Schema::for_kind(kind);
        assert_eq!(schema.columns[0], "Project URL");
        assert_eq!(schema.columns[1], "SHA Detected");
        assert_eq!(schema.columns[2], "Module Path");
        assert_eq!(
            schema.columns[3],
            "Fully-Qualified Test Name (packageName.ClassName.methodName)"
        );
    }
}

#[test]
fn test_column_counts() {
    assert_eq!(pr::COLUMNS.len(), 8);
    assert_eq!(tic_fic::COLUMNS.len(), 19);
    assert_eq!(tso_iso::COLUMNS.len(), 12);
}

#[test]
fn test_only_pr_data_is_sorted() {
    assert!(Schema::for_kind(SchemaKind::Pr).sort_key.is_some());
    assert!(Schema::for_kind(SchemaKind::TicFic).sort_key.is_none());
    assert!(Schema::for_kind(SchemaKind::TsoIso).sort_key.is_none());
}

#[test]
fn test_header_matches_exact_order_only() {
    let schema = Schema::for_kind(SchemaKind::Pr);
    assert!(schema.header_matches(pr::COLUMNS.iter().copied()));

    let mut swapped: Vec<&str> = pr::COLUMNS.to_vec();
    swapped.swap(4, 5);
    assert!(!schema.header_matches(swapped));

    let truncated = &pr::COLUMNS[..7];
    assert!(!schema.header_matches(truncated.iter().copied()));
}

#[test]
fn test_default_file_names() {
    assert_eq!(SchemaKind::Pr.default_file_name(), "pr-data.csv");
    assert_eq!(SchemaKind::TicFic.default_file_name(), "tic-fic-data.csv");
    assert_eq!(SchemaKind::TsoIso.default_file_name(), "tso-iso-rates.csv");
}

// =========================================================================
// Common patterns
// =========================================================================

#[test]
fn test_project_url_pattern() {
    assert!(PROJECT_URL_PATTERN.is_match("https://github.com/apache/dubbo"));
    assert!(PROJECT_URL_PATTERN.is_match("https://github.com/spring-projects/spring.boot"));
    assert!(!PROJECT_URL_PATTERN.is_match("https://github.com/apache"));
    assert!(!PROJECT_URL_PATTERN.is_match("https://github.com/apache/dubbo/tree/master"));
    assert!(!PROJECT_URL_PATTERN.is_match("http://github.com/apache/dubbo"));
    assert!(!PROJECT_URL_PATTERN.is_match("https://gitlab.com/apache/dubbo"));
}

#[test]
fn test_sha_pattern() {
    assert!(SHA_PATTERN.is_match("0123456789abcdef0123456789abcdef01234567"));
    assert!(!SHA_PATTERN.is_match("0123456789ABCDEF0123456789ABCDEF01234567"));
    assert!(!SHA_PATTERN.is_match("0123456"));
}

#[test]
fn test_module_path_pattern() {
    assert!(MODULE_PATH_PATTERN.is_match(""));
    assert!(MODULE_PATH_PATTERN.is_match("."));
    assert!(MODULE_PATH_PATTERN.is_match("dubbo-rpc/dubbo-rpc-api"));
    assert!(!MODULE_PATH_PATTERN.is_match("/absolute/path"));
    assert!(!MODULE_PATH_PATTERN.is_match("has space"));
}

#[test]
fn test_test_name_pattern() {
    assert!(TEST_NAME_PATTERN.is_match("org.apache.dubbo.FooTest.testBar"));
    assert!(TEST_NAME_PATTERN.is_match("com.example.ParamTest.testCase[3]"));
    assert!(TEST_NAME_PATTERN.is_match("com.pinterest.secor.io impl.FooTest.testBar"));
    assert!(!TEST_NAME_PATTERN.is_match("testBar"));
    assert!(!TEST_NAME_PATTERN.is_match(""));
}

// =========================================================================
// pr-data.csv
// =========================================================================

#[test]
fn test_category_accepts_single_and_combined() {
    let check = check_for(SchemaKind::Pr, pr::CATEGORY);
    assert!(check.matches("OD"));
    assert!(check.matches("OD-Vic"));
    assert!(check.matches("ID;NOD"));
    assert!(!check.matches("XX"));
    assert!(!check.matches("OD;"));
    assert!(!check.matches(""));
    assert!(!check.matches("OD;XX"));
}

#[test]
fn test_status_enumeration() {
    let check = check_for(SchemaKind::Pr, pr::STATUS);
    assert!(check.matches(""));
    assert!(check.matches("DeveloperFixed"));
    assert!(!check.matches("accepted"));
}

#[test]
fn test_pr_link_may_be_empty() {
    let check = check_for(SchemaKind::Pr, pr::PR_LINK);
    assert!(check.matches(""));
    assert!(check.matches("https://github.com/apache/dubbo/pull/12"));
    assert!(!check.matches("https://github.com/apache/dubbo/issues/12"));
}

#[test]
fn test_notes_must_be_dataset_issue_link() {
    let check = check_for(SchemaKind::Pr, pr::NOTES);
    assert!(check.matches(""));
    assert!(check.matches("https://github.com/TestingResearchIllinois/idoft/issues/7"));
    assert!(check.matches(
        "https://github.com/TestingResearchIllinois/flaky-test-dataset/issues/120"
    ));
    assert!(!check.matches("https://github.com/apache/dubbo/issues/7"));
    assert!(!check.matches("see the PR"));
}

#[test]
fn test_pr_repository_strips_pull_suffix() {
    assert_eq!(
        pr::pr_repository("https://github.com/apache/dubbo/pull/42"),
        "https://github.com/apache/dubbo"
    );
}

#[test]
fn test_pr_link_matches_project_case_insensitively() {
    let renames = BTreeMap::new();
    assert!(pr::pr_link_matches_project(
        "https://github.com/Apache/Dubbo/pull/42",
        "https://github.com/apache/dubbo",
        &renames
    ));
    assert!(!pr::pr_link_matches_project(
        "https://github.com/other/dubbo/pull/42",
        "https://github.com/apache/dubbo",
        &renames
    ));
    assert!(!pr::pr_link_matches_project(
        "",
        "https://github.com/apache/dubbo",
        &renames
    ));
}

#[test]
fn test_pr_link_matches_renamed_project() {
    let renames = dubbo_renames();
    assert!(pr::pr_link_matches_project(
        "https://github.com/apache/dubbo/pull/1",
        "https://github.com/apache/incubator-dubbo",
        &renames
    ));
    assert!(!pr::pr_link_matches_project(
        "https://github.com/apache/dubbo/pull/1",
        "https://github.com/apache/incubator-other",
        &renames
    ));
}

#[test]
fn test_status_advisories() {
    assert!(pr::status_advisories("Accepted", "", "").is_empty());
    assert_eq!(
        pr::status_advisories("Skipped", "", ""),
        vec!["Status Skipped should contain a note".to_string()]
    );
    assert_eq!(pr::status_advisories("InspiredAFix", "", "").len(), 2);
    assert!(pr::status_advisories(
        "InspiredAFix",
        "https://github.com/TestingResearchIllinois/idoft/issues/1",
        "https://github.com/a/b/pull/3"
    )
    .is_empty());
}

// =========================================================================
// tic-fic-data.csv and tso-iso-rates.csv
// =========================================================================

#[test]
fn test_tic_fic_optional_columns() {
    assert!(check_for(SchemaKind::TicFic, tic_fic::FLAKY_TEST_FILE_MODIFIED).matches(""));
    assert!(check_for(SchemaKind::TicFic, tic_fic::BUILD_FILES_MODIFIED).matches("TRUE"));
    assert!(!check_for(SchemaKind::TicFic, tic_fic::BUILD_FILES_MODIFIED).matches("true"));
    assert!(check_for(SchemaKind::TicFic, tic_fic::COMMITS_BETWEEN).matches("17"));
    assert!(!check_for(SchemaKind::TicFic, tic_fic::COMMITS_BETWEEN).matches("1.5"));
    assert!(check_for(SchemaKind::TicFic, tic_fic::DAYS_BETWEEN).matches("3.25"));
    assert!(!check_for(SchemaKind::TicFic, tic_fic::DAYS_BETWEEN).matches("3"));
}

#[test]
fn test_tic_eq_fic_is_required() {
    let check = check_for(SchemaKind::TicFic, tic_fic::TIC_EQ_FIC);
    assert!(check.matches("FALSE"));
    assert!(!check.matches(""));
}

#[test]
fn test_tso_iso_patterns() {
    let rounds = check_for(SchemaKind::TsoIso, tso_iso::TSO_FAILURES);
    assert!(rounds.matches("(0;3;12)"));
    assert!(!rounds.matches("(3)"));
    assert!(!rounds.matches("0;3"));

    let p_value = check_for(SchemaKind::TsoIso, tso_iso::P_VALUE);
    assert!(p_value.matches("0"));
    assert!(p_value.matches("0.0312"));
    assert!(p_value.matches("1.2E-5"));
    assert!(!p_value.matches(".5"));

    let direction = check_for(SchemaKind::TsoIso, tso_iso::LESS_OR_GREATER);
    assert!(direction.matches("less"));
    assert!(!direction.matches("equal"));

    assert!(check_for(SchemaKind::TsoIso, tso_iso::ISO_PASSES).matches("100"));
    assert!(!check_for(SchemaKind::TsoIso, tso_iso::ISO_PASSES).matches(""));
}
