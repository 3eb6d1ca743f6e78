//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

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

/// Configuration for the tools domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Deployment profile. Governs whether internal diagnostic detail is
    /// attached to error responses.
    pub environment: Environment,

    /// Budget for a single tool call, in seconds. Handlers still running
    /// when it expires are dropped and the call fails as internal.
    pub call_timeout_secs: u64,
}

/// Deployment profile for the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Diagnostic detail is stripped from error responses.
    Production,
    /// Diagnostic detail is attached to error responses.
    Development,
}

impl Environment {
    /// Whether caller-visible diagnostic detail is enabled.
    pub fn detail_enabled(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            // Safe default: never leak internals unless explicitly opted in.
            environment: Environment::Production,
            call_timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "calculator-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools: ToolsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
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
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_ENVIRONMENT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(environment) = std::env::var("MCP_ENVIRONMENT") {
            match Environment::parse(&environment) {
                Some(parsed) => {
                    config.tools.environment = parsed;
                    info!("Environment profile: {parsed:?}");
                }
                None => warn!(
                    "Unrecognized MCP_ENVIRONMENT value '{environment}', staying on {:?}",
                    config.tools.environment
                ),
            }
        } else {
            warn!(
                "MCP_ENVIRONMENT not set - defaulting to production \
                 (error detail stripped from responses)"
            );
        }

        if let Ok(timeout) = std::env::var("MCP_TOOL_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.tools.call_timeout_secs = secs,
                Err(_) => warn!("Invalid MCP_TOOL_TIMEOUT_SECS value '{timeout}', keeping default"),
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
    fn test_default_is_production() {
        let config = Config::default();
        assert_eq!(config.tools.environment, Environment::Production);
        assert!(!config.tools.environment.detail_enabled());
        assert_eq!(config.tools.call_timeout_secs, 30);
    }

    #[test]
    fn test_environment_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ENVIRONMENT", "development");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.environment, Environment::Development);
        assert!(config.tools.environment.detail_enabled());
        unsafe {
            std::env::remove_var("MCP_ENVIRONMENT");
        }
    }

    #[test]
    fn test_invalid_environment_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ENVIRONMENT", "staging");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.environment, Environment::Production);
        unsafe {
            std::env::remove_var("MCP_ENVIRONMENT");
        }
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.call_timeout_secs, 5);
        unsafe {
            std::env::remove_var("MCP_TOOL_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("prod"), Some(Environment::Production));
        assert_eq!(Environment::parse("DEVELOPMENT"), Some(Environment::Development));
        assert_eq!(Environment::parse("other"), None);
    }
}
