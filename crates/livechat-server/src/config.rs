//! Server configuration loading from file and environment variables.

use livechat_db::{DbError, DbSettings, DEFAULT_DATABASE};
use serde::Deserialize;
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Base connection URI. Left empty, the `MONGODB_URI` environment
    /// variable is consulted instead.
    #[serde(default)]
    pub uri: String,

    /// Name of the database to select.
    #[serde(default = "default_db_name")]
    pub database: String,

    /// Application name reported during the handshake.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// TCP connect timeout, in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Server selection timeout, in milliseconds.
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,

    /// Whether a failed connection aborts startup. When false the server
    /// starts degraded and the failure is visible only in the logs.
    #[serde(default)]
    pub required: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "livechat_db=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_db_name() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_app_name() -> String {
    "livechat".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_server_selection_timeout_ms() -> u64 {
    30_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            database: default_db_name(),
            app_name: default_app_name(),
            connect_timeout_ms: default_connect_timeout_ms(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
            required: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl DatabaseConfig {
    /// Resolves this section into bootstrapper settings.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::MissingUri`] or [`DbError::EmptyUri`] when no URI
    /// is configured and the environment does not provide one.
    pub fn to_db_settings(&self) -> Result<DbSettings, DbError> {
        let uri = if self.uri.trim().is_empty() {
            DbSettings::from_env()?.uri
        } else {
            self.uri.clone()
        };

        Ok(DbSettings {
            uri,
            database: self.database.clone(),
            app_name: self.app_name.clone(),
            connect_timeout_ms: self.connect_timeout_ms,
            server_selection_timeout_ms: self.server_selection_timeout_ms,
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `MONGODB_URI` overrides `database.uri`
/// - `LIVECHAT_DB_NAME` overrides `database.database`
/// - `LIVECHAT_DB_REQUIRED` overrides `database.required` (set to "true" to enable)
/// - `LIVECHAT_LOG_LEVEL` overrides `logging.level`
/// - `LIVECHAT_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(uri) = std::env::var("MONGODB_URI") {
        config.database.uri = uri;
    }
    if let Ok(name) = std::env::var("LIVECHAT_DB_NAME") {
        config.database.database = name;
    }
    if let Ok(required) = std::env::var("LIVECHAT_DB_REQUIRED") {
        config.database.required = required == "true" || required == "1";
    }
    if let Ok(level) = std::env::var("LIVECHAT_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("LIVECHAT_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
