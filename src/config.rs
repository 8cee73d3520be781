//! Configuration module for loading and parsing TOML configuration files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Market data provider configuration.
    pub market_data: MarketDataConfig,
    /// Language model configuration.
    pub model: ModelConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Market data provider configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// History window requested from the provider (e.g. "1mo").
    pub range: String,
    /// Bar interval (e.g. "1d").
    pub interval: String,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            range: "1mo".to_string(),
            interval: "1d".to_string(),
        }
    }
}

/// Language model configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier.
    pub name: String,
    /// Base URL of the Generative Language REST API.
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the runtime configuration: the file named by `CONFIG_PATH` if
    /// set, otherwise defaults, then environment overrides.
    ///
    /// # Errors
    /// Returns error if the file is unreadable or a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies `HOST`, `PORT`, `GEMINI_MODEL` and `GEMINI_BASE_URL` overrides
    /// looked up through `lookup`.
    ///
    /// # Errors
    /// Returns error if `PORT` is not a valid port or the result fails validation.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(format!("PORT must be a valid number, got {}", port))
            })?;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.model.name = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.model.base_url = base_url;
        }
        self.validate()
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "server host cannot be empty".to_string(),
            ));
        }
        if self.market_data.range.is_empty() || self.market_data.interval.is_empty() {
            return Err(ConfigError::InvalidValue(
                "market data range and interval must be set".to_string(),
            ));
        }
        if self.model.name.is_empty() {
            return Err(ConfigError::InvalidValue(
                "model name cannot be empty".to_string(),
            ));
        }
        url::Url::parse(&self.model.base_url).map_err(|e| {
            ConfigError::InvalidValue(format!("model base_url {}: {}", self.model.base_url, e))
        })?;

        Ok(())
    }
}
