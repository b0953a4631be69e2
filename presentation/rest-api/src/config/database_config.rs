use std::env;
use std::str::FromStr;
use std::time::Duration;

use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.unknown_store: {0}")]
    UnknownStore(String),
    #[error("config.invalid_number: {0}")]
    InvalidNumber(&'static str),
    #[error("config.missing: {0}")]
    Missing(&'static str),
}

/// Where the catalog keeps its products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStore {
    Postgres,
    Memory,
}

impl CatalogStore {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStore::Postgres => "postgres",
            CatalogStore::Memory => "memory",
        }
    }
}

impl FromStr for CatalogStore {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(CatalogStore::Postgres),
            "memory" | "in-memory" => Ok(CatalogStore::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

/// Storage settings.
///
/// Environment variables:
/// - CATALOG_STORE: `postgres` (default) or `memory`
/// - DATABASE_URL: PostgreSQL connection string (required for `postgres`)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 30)
/// - DATABASE_MIGRATIONS_PATH: migrations directory (default: "./migrations")
/// - CATALOG_SEED_SAMPLE_DATA: seed an empty catalog on startup (default: true)
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub store: CatalogStore,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub migrations_path: String,
    pub seed_sample_data: bool,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("CATALOG_STORE") {
            Some(raw) => raw.parse()?,
            None => CatalogStore::Postgres,
        };
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("DATABASE_MAX_CONNECTIONS"))?,
            None => 5,
        };
        let acquire_timeout_secs = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("DATABASE_ACQUIRE_TIMEOUT_SECS"))?,
            None => 30,
        };
        let seed_sample_data = lookup("CATALOG_SEED_SAMPLE_DATA")
            .map(|raw| !matches!(raw.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Ok(Self {
            store,
            database_url: lookup("DATABASE_URL"),
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            migrations_path: lookup("DATABASE_MIGRATIONS_PATH")
                .unwrap_or_else(|| "./migrations".to_string()),
            seed_sample_data,
        })
    }
}

/// Initialize database connection pool from the storage settings
///
/// # Errors
/// Returns error if DATABASE_URL is not set or connection fails
pub async fn init_database(config: &StorageConfig) -> anyhow::Result<PgPool> {
    let db_url = config
        .database_url
        .clone()
        .ok_or(ConfigError::Missing("DATABASE_URL"))?;
    let pool = create_postgres_pool(&DatabaseConfig {
        connection_string: db_url,
        max_connections: config.max_connections,
        acquire_timeout: config.acquire_timeout,
    })
    .await?;
    Ok(pool)
}
