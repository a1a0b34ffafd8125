//! Tracing/logging initialization.
//!
//! Logs always go to stderr so they never interleave with console output.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, TelemetryConfig};

/// Initialize tracing/logging for the process.
///
/// The filter has already been validated by [`TelemetryConfig::from_lookup`].
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &TelemetryConfig) {
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}
