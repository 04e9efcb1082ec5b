//! Configuration types and defaults for flaky-check.

use crate::schema::SchemaKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File names of the three datasets, relative to the repository directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetFiles {
    pub pr: String,
    pub tic_fic: String,
    pub tso_iso: String,
}

impl DatasetFiles {
    /// File name configured for a schema.
    pub fn for_kind(&self, kind: SchemaKind) -> &str {
        match kind {
            SchemaKind::Pr => &self.pr,
            SchemaKind::TicFic => &self.tic_fic,
            SchemaKind::TsoIso => &self.tso_iso,
        }
    }
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            pr: SchemaKind::Pr.default_file_name().to_string(),
            tic_fic: SchemaKind::TicFic.default_file_name().to_string(),
            tso_iso: SchemaKind::TsoIso.default_file_name().to_string(),
        }
    }
}

/// A known-bad legacy row that is exempt from checking.
///
/// Rows are identified by project and test name rather than line number so
/// the exemption survives reordering of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Dataset the row lives in.
    pub schema: SchemaKind,
    /// Exact `Project URL` value of the row.
    pub project_url: String,
    /// Exact fully-qualified test name of the row.
    pub test_name: String,
    /// Why the row is exempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SkippedRow {
    /// Returns true if this entry exempts the given row.
    pub fn matches(&self, schema: SchemaKind, project_url: &str, test_name: &str) -> bool {
        self.schema == schema && self.project_url == project_url && self.test_name == test_name
    }
}

// Default value functions for serde
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}

/// Projects that moved on GitHub: rows keep the old URL, PRs use the new one.
pub fn default_project_renames() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "https://github.com/apache/incubator-dubbo".to_string(),
        "https://github.com/apache/dubbo".to_string(),
    )])
}
