//! Stockroom configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Every variable is optional; a bare `stockroom` invocation seeds
//! `./stockroom.db` and prints plain text.

use std::env;
use std::path::PathBuf;

use stockroom_db::{DbConfig, OutputFormat};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./stockroom.db";

/// Stockroom configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StockroomConfig {
    /// SQLite file path, or `:memory:` (`STOCKROOM_DB_PATH`)
    pub database_path: PathBuf,

    /// Pool size (`STOCKROOM_MAX_CONNECTIONS`, default 5)
    pub max_connections: u32,

    /// Line rendering (`STOCKROOM_OUTPUT`, `text` or `json`)
    pub output: OutputFormat,
}

impl StockroomConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("STOCKROOM_DB_PATH")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let max_connections: u32 = lookup("STOCKROOM_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("STOCKROOM_MAX_CONNECTIONS".to_string()))?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "STOCKROOM_MAX_CONNECTIONS".to_string(),
            ));
        }

        let output = match lookup("STOCKROOM_OUTPUT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKROOM_OUTPUT".to_string()))?,
            None => OutputFormat::default(),
        };

        Ok(StockroomConfig {
            database_path: PathBuf::from(database_path),
            max_connections,
            output,
        })
    }

    /// Database settings for this configuration.
    ///
    /// In-memory databases keep the single-connection defaults.
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(&self.database_path);
        if config.is_in_memory() {
            return DbConfig::in_memory();
        }
        config.max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
