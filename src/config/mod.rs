//! Configuration Module
//!
//! Loads and validates configuration from TOML files.

pub mod loader;

pub use loader::{
    BotSection, Config, ConfigError, HttpSection, LoggingSection, SourcesSection, BOT_TOKEN_ENV,
    DEFAULT_CONFIG_PATH, expand_path, load_config, load_config_or_default,
};
