//! Tracing and logging (shared setup).

/// Environment-driven telemetry configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, TelemetryConfig};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<TelemetryConfig, ConfigError> {
    let config = TelemetryConfig::from_env()?;
    tracing::init(&config);
    Ok(config)
}
