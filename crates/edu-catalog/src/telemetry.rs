//! Log subscriber setup
//!
//! The library only emits `tracing` events; binaries call [`init`] once to
//! install a subscriber. `EDU_LOG` overrides the configured filter.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::CatalogError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding [`LoggingConfig::filter`]
pub const LOG_ENV: &str = "EDU_LOG";

/// Install the global subscriber
///
/// # Errors
/// Returns [`CatalogError::Config`] for an invalid filter directive or if a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), CatalogError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| CatalogError::Config(format!("log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };
    result.map_err(|e| CatalogError::Config(format!("log subscriber: {e}")))
}
