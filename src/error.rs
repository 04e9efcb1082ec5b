//! Error types for the flaky-check CLI.
//!
//! Individual dataset violations are collected in a
//! [`Report`](crate::validate::Report) rather than raised. Once a run is
//! complete, a failing report becomes [`CheckerError::ViolationsFound`].

use crate::exit_codes;
use thiserror::Error;

/// Error outcome of a checker run.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum CheckerError {
    /// The run completed and logged this many errors.
    #[error("FAILURE: Exiting with code 1 due to {0} logged errors.")]
    ViolationsFound(usize),

    /// User provided invalid arguments or a dataset file is unusable.
    #[error("{0}")]
    UserError(String),

    /// The configuration file could not be read or failed validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl CheckerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckerError::ViolationsFound(_) => exit_codes::VIOLATIONS,
            CheckerError::UserError(_) => exit_codes::USER_ERROR,
            CheckerError::ConfigError(_) => exit_codes::USER_ERROR,
            CheckerError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for checker operations.
pub type Result<T> = std::result::Result<T, CheckerError>;
