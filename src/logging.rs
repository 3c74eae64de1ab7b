//! Diagnostic logging.
//!
//! Logs go to standard error so standard output carries only command output.
//! The filter comes from `$VPNCTL_LOG` and defaults to warnings.

use color_eyre::{eyre::eyre, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(constants::ENV_LOG)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| eyre!(e))
}
