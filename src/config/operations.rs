//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{CheckerError, Result};
use crate::schema::SchemaKind;
use crate::schema::common::PROJECT_URL_PATTERN;
use std::path::Path;

/// Name of the optional config file in the repository directory.
pub const CONFIG_FILE_NAME: &str = ".flaky-check.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CheckerError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckerError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.flaky-check.yaml` from `dir` if present, otherwise use defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CheckerError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `remote` must be non-empty
    /// - dataset file names must be non-empty
    /// - `project_renames` keys and values must be GitHub project URLs
    /// - `skip_rows` entries must name a project and a test
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(CheckerError::ConfigError(
                "remote must not be empty".to_string(),
            ));
        }

        for kind in SchemaKind::ALL {
            if self.files.for_kind(kind).trim().is_empty() {
                return Err(CheckerError::ConfigError(format!(
                    "files.{} must not be empty",
                    kind
                )));
            }
        }

        for (old, new) in &self.project_renames {
            for url in [old, new] {
                if !PROJECT_URL_PATTERN.is_match(url) {
                    return Err(CheckerError::ConfigError(format!(
                        "project_renames entry '{}' is not a https://github.com/<owner>/<repo> URL",
                        url
                    )));
                }
            }
        }

        for (i, row) in self.skip_rows.iter().enumerate() {
            if row.project_url.is_empty() || row.test_name.is_empty() {
                return Err(CheckerError::ConfigError(format!(
                    "skip_rows[{}] must set both project_url and test_name",
                    i
                )));
            }
        }

        Ok(())
    }

    /// Returns true if the row is on the legacy allow-list.
    pub fn is_skipped_row(&self, schema: SchemaKind, project_url: &str, test_name: &str) -> bool {
        self.skip_rows
            .iter()
            .any(|row| row.matches(schema, project_url, test_name))
    }
}
