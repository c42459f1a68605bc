//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JOIN_WINDOW_MINUTES, DEFAULT_JUDGE_REQUEST_DELAY_MS,
    DEFAULT_JUDGE_REQUEST_TIMEOUT_SECONDS, DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

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
    pub jwt: JwtConfig,
    pub contest: ContestConfig,
    pub judge: JudgeConfig,
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

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// Contest policy configuration
#[derive(Debug, Clone)]
pub struct ContestConfig {
    /// Whether entry closes a fixed number of minutes after contest start
    pub enforce_join_window: bool,
    /// Join window length in minutes, measured from contest start
    pub join_window_minutes: i64,
}

/// External judge client configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Courtesy delay before each upstream request, in milliseconds
    pub request_delay_ms: u64,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            contest: ContestConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
        })
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
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
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
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl ContestConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            enforce_join_window: env::var("CONTEST_ENFORCE_JOIN_WINDOW")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            join_window_minutes: env::var("CONTEST_JOIN_WINDOW_MINUTES")
                .unwrap_or_else(|_| DEFAULT_JOIN_WINDOW_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CONTEST_JOIN_WINDOW_MINUTES".to_string()))?,
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            request_delay_ms: env::var("JUDGE_REQUEST_DELAY_MS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_REQUEST_DELAY_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_REQUEST_DELAY_MS".to_string()))?,
            request_timeout_seconds: env::var("JUDGE_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_REQUEST_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("JUDGE_REQUEST_TIMEOUT_SECONDS".to_string())
                })?,
        })
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
    use crate::constants::DEFAULT_JOIN_WINDOW_MINUTES;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
        assert_eq!(DEFAULT_JOIN_WINDOW_MINUTES, 10);
    }
}
