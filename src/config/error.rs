//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Reveal delay must be at most {max_ms} ms, got {actual_ms} ms")]
    RevealDelayTooLong { max_ms: u64, actual_ms: u64 },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
