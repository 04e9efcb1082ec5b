//! Configuration model for flaky-check.
//!
//! This module defines the Config struct that represents `.flaky-check.yaml`.
//! The file is optional. Unknown fields are ignored, every field has a
//! default, and values are validated after parsing.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub use types::{DatasetFiles, SkippedRow};
