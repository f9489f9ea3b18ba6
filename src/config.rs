//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Configuration problems detected at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Postgres backend selected without a connection string
    #[error("POSTGRES_URL (or DATABASE_URL) must be set for the postgres backend")]
    MissingDatabaseUrl,
}

/// Which data-access backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL through a shared connection pool
    Postgres,
    /// Process-local store, lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string, if any
    pub database_url: Option<String>,
    /// Storage backend to use
    pub storage: StorageBackend,
    /// Maximum number of pooled database connections
    pub max_connections: u32,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Environment Variables
    /// - `POSTGRES_URL` - Connection string (falls back to `DATABASE_URL`)
    /// - `STORAGE_BACKEND` - `postgres` or `memory` (default: postgres)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from any key lookup, applying the same defaults as
    /// [`Config::from_env`]. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            database_url: var("POSTGRES_URL").or_else(|| var("DATABASE_URL")),
            storage: var("STORAGE_BACKEND")
                .and_then(|v| match v.parse::<StorageBackend>() {
                    Ok(backend) => Some(backend),
                    Err(e) => {
                        tracing::warn!("{}, using {:?}", e, defaults.storage);
                        None
                    }
                })
                .unwrap_or(defaults.storage),
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            server_port: var("SERVER_PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Connection string required by the postgres backend.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            storage: StorageBackend::Postgres,
            max_connections: 5,
            server_port: 8080,
        }
    }
}
