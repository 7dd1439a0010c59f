//! Structured logging setup.
//!
//! Installs a global `tracing-subscriber` formatter. `RUST_LOG` takes
//! precedence over the configured level when it is set.

use crate::config::LoggingConfig;
use crate::error::{Result, WireError};
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, letting `RUST_LOG` override the level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    let res = if config.json_format {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    res.map_err(|e| WireError::ConfigError(format!("Failed to install logger: {e}")))?;
    tracing::info!(app = %config.app_name, level = %config.log_level, "logging initialized");
    Ok(())
}

