//! Structured logging setup.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! `server.log_filter`. Output is pretty or JSON per `server.log_format`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ServerConfig};

/// Builds the filter, preferring `RUST_LOG` over the configured directive.
pub fn env_filter(server: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(server: &ServerConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(server));

    match server.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_falls_back() {
        let server = ServerConfig {
            log_filter: "[[not a filter".to_string(),
            ..Default::default()
        };
        // Must not panic
        let _ = env_filter(&server);
    }

    #[test]
    fn default_directive_is_valid() {
        assert!(EnvFilter::try_new(&ServerConfig::default().log_filter).is_ok());
    }
}
