//! HTTP listener and log output settings

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Where the API listens and how it reports.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1` or `::`
    pub host: IpAddr,

    pub port: u16,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,

    pub log_format: LogFormat,

    /// Whole-request budget, including the simulated pause
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins; any origin when unset
    pub allowed_origins: Option<String>,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for a terminal
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parsed `allowed_origins`, blanks dropped.
    pub fn origins(&self) -> Vec<&str> {
        self.allowed_origins
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout(MAX_REQUEST_TIMEOUT_SECS));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            log_filter: "info,ai_dss=debug,tower_http=info".to_string(),
            log_format: LogFormat::default(),
            request_timeout_secs: 30,
            allowed_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ipv6_host_builds_bracketed_address() {
        let config = ServerConfig {
            host: "::1".parse().unwrap(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().to_string(), "[::1]:9000");
    }

    #[test]
    fn unset_origins_mean_none_listed() {
        assert!(ServerConfig::default().origins().is_empty());
    }

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let config = ServerConfig {
            allowed_origins: Some(" http://localhost:5173, ,https://dss.example.org,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.origins(),
            vec!["http://localhost:5173", "https://dss.example.org"]
        );
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn timeout_must_be_between_one_second_and_the_cap() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ValidationError::InvalidTimeout(_))),
                "{secs}s"
            );
        }
    }

    #[test]
    fn log_format_reads_lowercase_names() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
