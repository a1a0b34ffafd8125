//! Telemetry configuration resolved from environment variables.

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `STOCKROOM_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOCKROOM_LOG is not a valid filter directive ({directive}): {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("STOCKROOM_LOG_FORMAT must be one of 'compact', 'pretty' or 'json' (got {0})")]
    InvalidLogFormat(String),
}

/// Runtime telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive, e.g. `stockroom_inventory=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TelemetryConfig {
    /// Reads `STOCKROOM_LOG` (falling back to `RUST_LOG`) and `STOCKROOM_LOG_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`TelemetryConfig::from_env`] but reads from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup("STOCKROOM_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        EnvFilter::try_new(&filter).map_err(|err| ConfigError::InvalidFilter {
            directive: filter.clone(),
            reason: err.to_string(),
        })?;
        let format = match lookup("STOCKROOM_LOG_FORMAT") {
            Some(value) => LogFormat::parse(&value)?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}
