//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config.toml structure.
//! Every section is optional; a missing file means "all defaults".

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::adapters::dexscreener::DEXSCREENER_API;
use crate::adapters::http::{HttpConfig, DEFAULT_USER_AGENT};
use crate::adapters::market_data::{COINGECKO_API, JUPITER_PRICE_API};
use crate::adapters::token_metadata::SOLSCAN_API;

/// Environment variable holding the Discord bot token
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotSection,
    #[serde(default)]
    pub http: HttpSection,
    #[serde(default)]
    pub sources: SourcesSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Chat bot configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotSection {
    /// Prefix for `test` / `info` commands
    pub command_prefix: String,
}

impl Default for BotSection {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
        }
    }
}

impl BotSection {
    /// Bot token from the environment. Never read from the config file.
    pub fn bot_token(&self) -> Option<String> {
        non_empty(std::env::var(BOT_TOKEN_ENV).ok())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Outbound HTTP configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    /// Per-request timeout, also the per-source budget in the resolver
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl From<&HttpSection> for HttpConfig {
    fn from(section: &HttpSection) -> Self {
        HttpConfig {
            timeout: section.timeout(),
            user_agent: section.user_agent.clone(),
        }
    }
}

/// Upstream API base URLs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesSection {
    pub dexscreener_url: String,
    pub jupiter_price_url: String,
    pub solscan_url: String,
    pub coingecko_url: String,
}

impl Default for SourcesSection {
    fn default() -> Self {
        Self {
            dexscreener_url: DEXSCREENER_API.to_string(),
            jupiter_price_url: JUPITER_PRICE_API.to_string(),
            solscan_url: SOLSCAN_API.to_string(),
            coingecko_url: COINGECKO_API.to_string(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Expand `~` in a config path
pub fn expand_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let raw = path.as_ref().to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(expand_path(path))?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration, falling back to defaults when the file does not exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = expand_path(path);
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate bot section
        let prefix = &self.bot.command_prefix;
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "command_prefix must be non-empty without whitespace, got {:?}",
                prefix
            )));
        }

        // Validate HTTP section
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        // Validate source URLs
        let urls = [
            ("dexscreener_url", &self.sources.dexscreener_url),
            ("jupiter_price_url", &self.sources.jupiter_price_url),
            ("solscan_url", &self.sources.solscan_url),
            ("coingecko_url", &self.sources.coingecko_url),
        ];
        for (key, url) in urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an http(s) URL, got {:?}",
                    key, url
                )));
            }
        }

        // Validate logging
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}
