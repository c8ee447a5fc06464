//! Structured logging for helpgen
//!
//! This module provides the logging infrastructure for helpgen, using
//! `tracing` with configurable output formats.
//!
//! # Usage
//!
//! Initialize logging once at startup:
//!
//! ```ignore
//! use helpgen_core::config::LogFormat;
//! use helpgen_core::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig {
//!     level: "info".to_string(),
//!     format: LogFormat::Pretty,
//! };
//! init_logging(&config)?;
//! ```

use std::io;
use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub use crate::config::LogFormat;

/// Global flag to track if logging has been initialized
static LOGGING_INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (trace, debug, info, warn, error)
    /// Can be overridden by the RUST_LOG environment variable
    pub level: String,

    /// Output format (pretty or json)
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize the global logging subscriber
///
/// This function should be called once at application startup.
/// Subsequent calls will return `Err(LogError::AlreadyInitialized)`.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_ansi(true),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .flatten_event(true),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let _ = LOGGING_INITIALIZED.set(true);

    tracing::debug!(
        log_level = %config.level,
        log_format = %config.format,
        "Logging initialized"
    );

    Ok(())
}

/// Check if logging has been initialized
#[must_use]
pub fn is_logging_initialized() -> bool {
    LOGGING_INITIALIZED.get().is_some()
}
