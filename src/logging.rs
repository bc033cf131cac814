//! Diagnostic logging to stderr.
//!
//! Secrets, passphrases and ciphertext are never passed to `tracing`
//! macros anywhere in the crate; only paths, tags and record counts are.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::errors::{Result, VaultError};

/// Pick the effective filter: `-v` flags raise the configured level.
pub fn filter_directive(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber.
pub fn init_logging(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| VaultError::ConfigError(format!("invalid log_level '{directive}': {e}")))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| VaultError::ConfigError(format!("logging already initialized: {e}")))
}
