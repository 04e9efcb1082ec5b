//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a checker run.
///
/// This struct represents the contents of `.flaky-check.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Git settings
    // =========================================================================
    /// Remote whose tracking branch bounds the local commit range (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    // =========================================================================
    // Dataset settings
    // =========================================================================
    /// Dataset file names.
    #[serde(default)]
    pub files: DatasetFiles,

    /// Old project URL -> new project URL for projects renamed on GitHub.
    #[serde(default = "default_project_renames")]
    pub project_renames: BTreeMap<String, String>,

    /// Legacy rows exempt from all row checks.
    #[serde(default)]
    pub skip_rows: Vec<SkippedRow>,

    /// Whether advisory warnings also fail the run.
    #[serde(default)]
    pub warnings_as_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            files: DatasetFiles::default(),
            project_renames: default_project_renames(),
            skip_rows: Vec::new(),
            warnings_as_errors: false,
        }
    }
}
