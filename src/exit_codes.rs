//! Exit code constants for the flaky-check CLI.
//!
//! - 0: Success (no violations)
//! - 1: One or more dataset violations were found
//! - 2: User error (bad args, missing dataset file, invalid config)
//! - 3: Git operation failure

/// Successful execution with zero violations.
pub const SUCCESS: i32 = 0;

/// At least one violation was logged during the run.
pub const VIOLATIONS: i32 = 1;

/// User error: bad arguments, unreadable dataset file, or invalid config.
pub const USER_ERROR: i32 = 2;

/// Git operation failure: log or blame could not be computed.
pub const GIT_FAILURE: i32 = 3;
