//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL for the remote epoch server.
pub const DEFAULT_EPOCH_SERVER_URL: &str = "http://localhost:8080";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote epoch server configuration.
    pub epoch: EpochServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the remote epoch server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochServerConfig {
    /// Base URL of the epoch server, without a trailing slash.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for EpochServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EPOCH_SERVER_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "epoch-server-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            epoch: EpochServerConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server and logging settings are prefixed with `MCP_` (for example
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`). The epoch server address is
    /// read from `EPOCH_SERVER_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // An empty EPOCH_SERVER_URL falls back to the default rather than
        // producing requests against an empty base URL.
        match std::env::var("EPOCH_SERVER_URL") {
            Ok(url) if !url.is_empty() => {
                config.epoch.base_url = url;
                info!("Epoch server URL loaded from environment");
            }
            _ => {
                warn!(
                    "EPOCH_SERVER_URL not set, using default: {}",
                    DEFAULT_EPOCH_SERVER_URL
                );
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_epoch_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("EPOCH_SERVER_URL", "http://epoch.internal:9090");
        }
        let config = Config::from_env();
        assert_eq!(config.epoch.base_url, "http://epoch.internal:9090");
        unsafe {
            std::env::remove_var("EPOCH_SERVER_URL");
        }
    }

    #[test]
    fn test_epoch_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("EPOCH_SERVER_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.epoch.base_url, DEFAULT_EPOCH_SERVER_URL);
    }

    #[test]
    fn test_epoch_url_empty_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("EPOCH_SERVER_URL", "");
        }
        let config = Config::from_env();
        assert_eq!(config.epoch.base_url, DEFAULT_EPOCH_SERVER_URL);
        unsafe {
            std::env::remove_var("EPOCH_SERVER_URL");
        }
    }

    #[test]
    fn test_config_default_server_name() {
        let config = Config::new();
        assert_eq!(config.server.name, "epoch-server-mcp");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
    }
}
