//! Server configuration read from the environment.
//!
//! `.env` is loaded by the binary before [`ServerConfig::from_env`] runs, so
//! values there behave exactly like exported variables.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT is set but not a valid port number
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    /// HOST is set but not an IP address
    #[error("Invalid HOST value {value:?}: {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,

    /// Reported by the health endpoint
    pub app_env: String,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            app_env: DEFAULT_APP_ENV.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read HOST, PORT, APP_ENV and LOG_LEVEL from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_value = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_value
            .trim()
            .parse::<IpAddr>()
            .map_err(|source| ConfigError::InvalidHost {
                value: host_value.clone(),
                source,
            })?;

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            app_env: lookup("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("APP_ENV", "production"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.app_env, "production");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("eighty"));

        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));

        let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
