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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and {0} seconds")]
    InvalidTimeout(u64),

    #[error("Simulated delay exceeds maximum allowed ({0} ms)")]
    DelayTooLong(u64),

    #[error("Request timeout ({timeout_ms} ms) must exceed the longest simulated delay ({delay_ms} ms)")]
    TimeoutBelowDelay { timeout_ms: u128, delay_ms: u128 },
}
