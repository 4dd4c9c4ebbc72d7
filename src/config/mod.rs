//! Application configuration management

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result, bail};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// SQLite connection URL (`sqlite:` prefix added to bare paths)
    pub database_url: String,

    /// Maximum pooled connections
    pub database_max_connections: u32,

    /// How long to keep retrying the initial connection
    pub database_connect_timeout: Duration,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Prefer DATABASE_PATH, fall back to DATABASE_URL
        let database_url = lookup("DATABASE_PATH")
            .or_else(|| lookup("DATABASE_URL"))
            .map(|v| normalize_database_url(&v))
            .unwrap_or_else(|| "sqlite:./data/catalog.db".to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => bail!("Invalid LOG_FORMAT '{}': expected json or pretty", other),
        };

        Ok(Self {
            host: lookup("HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .context("Invalid HOST")?,

            port: lookup("PORT")
                .unwrap_or_else(|| "4000".to_string())
                .parse()
                .context("Invalid PORT")?,

            database_url,

            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS")?,

            database_connect_timeout: Duration::from_secs(
                lookup("DATABASE_CONNECT_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("Invalid DATABASE_CONNECT_TIMEOUT_SECS")?,
            ),

            log_format,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn normalize_database_url(value: &str) -> String {
    if value.starts_with("sqlite:") {
        value.to_string()
    } else {
        format!("sqlite:{}", value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.database_url, "sqlite:./data/catalog.db");
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.database_connect_timeout, Duration::from_secs(30));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn test_database_path_wins_and_gets_prefix() {
        let config = config_from(&[
            ("DATABASE_PATH", "/var/lib/catalog.db"),
            ("DATABASE_URL", "sqlite::memory:"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite:/var/lib/catalog.db");

        let config = config_from(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
        assert!(config_from(&[("HOST", "not-an-ip")]).is_err());
    }

    #[test]
    fn test_pretty_logs() {
        let config = config_from(&[("LOG_FORMAT", "pretty")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
