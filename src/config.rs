//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_POLLING_INTERVAL_SECONDS, DEFAULT_REDIS_URL,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::utils::crypto::hash_string;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub polling: PollingConfig,
    pub ingest: IngestConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration (ranking cache)
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Snapshot freshness configuration
#[derive(Debug, Clone)]
pub struct PollingConfig {
    /// Seconds after which a polled assignment is considered stale
    pub interval_seconds: u64,
}

/// Ingest API configuration
#[derive(Clone)]
pub struct IngestConfig {
    /// SHA-256 hex digest of the ingest API key
    pub api_key_hash: String,
}

impl std::fmt::Debug for IngestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestConfig")
            .field("api_key_hash", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            polling: PollingConfig::from_env()?,
            ingest: IngestConfig::from_env()?,
        })
    }

    /// Environment-independent configuration with the given ingest key
    #[cfg(test)]
    pub(crate) fn for_tests(api_key: &str) -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                rust_log: "debug".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost/upsolve_rank_test".to_string(),
                max_connections: 1,
            },
            redis: RedisConfig {
                url: DEFAULT_REDIS_URL.to_string(),
            },
            polling: PollingConfig::default(),
            ingest: IngestConfig::with_key(api_key),
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
        })
    }
}

impl PollingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let interval_seconds: u64 = env::var("POLLING_INTERVAL_SECONDS")
            .unwrap_or_else(|_| DEFAULT_POLLING_INTERVAL_SECONDS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("POLLING_INTERVAL_SECONDS".to_string()))?;

        if interval_seconds == 0 {
            return Err(ConfigError::InvalidValue("POLLING_INTERVAL_SECONDS".to_string()));
        }

        Ok(Self { interval_seconds })
    }

    /// Freshness window as a duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_POLLING_INTERVAL_SECONDS,
        }
    }
}

impl IngestConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = env::var("INGEST_API_KEY")
            .map_err(|_| ConfigError::Missing("INGEST_API_KEY".to_string()))?;

        if key.trim().is_empty() {
            return Err(ConfigError::InvalidValue("INGEST_API_KEY".to_string()));
        }

        Ok(Self::with_key(&key))
    }

    /// Build an ingest config from a plaintext key
    pub fn with_key(key: &str) -> Self {
        Self {
            api_key_hash: hash_string(key),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);

        let polling = PollingConfig::default();
        assert_eq!(polling.interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_ingest_key_is_hashed_and_redacted() {
        let ingest = IngestConfig::with_key("secret");
        assert_ne!(ingest.api_key_hash, "secret");
        assert_eq!(ingest.api_key_hash.len(), 64);
        assert!(!format!("{:?}", ingest).contains(&ingest.api_key_hash));
    }
}
