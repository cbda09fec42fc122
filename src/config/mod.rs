//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AI_DSS` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a runnable
//! development configuration.
//!
//! # Example
//!
//! ```no_run
//! use ai_dss::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod advisor;
mod error;
mod server;
mod simulation;

pub use advisor::AdvisorConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};
pub use simulation::SimulationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// Simulated processing delays
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Chat advisor settings
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AI_DSS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AI_DSS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AI_DSS__SIMULATION__CHAT_DELAY_MS=0` -> `simulation.chat_delay_ms = 0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AI_DSS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    /// Also rejects a request timeout that would cut off the simulated
    /// pause of either endpoint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.simulation.validate()?;

        let timeout = self.server.request_timeout();
        let longest_delay = self.simulation.longest_delay();
        if timeout <= longest_delay {
            return Err(ValidationError::TimeoutBelowDelay {
                timeout_ms: timeout.as_millis(),
                delay_ms: longest_delay.as_millis(),
            });
        }
        Ok(())
    }
}
