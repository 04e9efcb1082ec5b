//! Log output setup.
//!
//! All findings are reported through `tracing` events on stderr. The filter
//! comes from `--log-level` (or `FLAKY_CHECK_LOG`).

use crate::error::{CheckerError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| CheckerError::UserError(format!("invalid log level '{}': {}", filter, e)))?;

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    Ok(())
}
