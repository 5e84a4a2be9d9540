//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DriverError, Result};

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token dump on stdout. The
/// default level is `warn`, or `debug` when `verbose` is set; a `RUST_LOG`
/// directive replaces either.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
