//! Tracing subscriber setup
//!
//! `REV_LOG` overrides the configured filter when set.

use crate::config::LoggingConfig;
use crate::error::RunnerError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding `EnvFilter` directives
pub const LOG_ENV: &str = "REV_LOG";

/// Build the filter from explicit directives
///
/// # Errors
/// Returns `Config` if the directives do not parse
pub fn filter_from(directives: &str) -> Result<EnvFilter, RunnerError> {
    EnvFilter::try_new(directives)
        .map_err(|e| RunnerError::Config(format!("invalid log filter '{directives}': {e}")))
}

/// Install the global subscriber, writing to stderr
///
/// # Errors
/// Returns `Config` if the filter is malformed or a subscriber is already set
pub fn init(config: &LoggingConfig) -> Result<(), RunnerError> {
    let directives = match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => config.filter.clone(),
    };
    let registry = tracing_subscriber::registry().with(filter_from(&directives)?);

    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    installed.map_err(|e| RunnerError::Config(format!("logging: {e}")))
}
