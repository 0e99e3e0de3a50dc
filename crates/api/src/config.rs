//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use database::Database;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Maximum pooled database connections.
    pub pool_size: u32,
    /// Fixed seed for tip sampling; entropy when unset.
    pub tip_seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PLANNER_ADDR` | Server bind address | `127.0.0.1:4000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:health_planner.db?mode=rwc` |
    /// | `DB_POOL_SIZE` | Database pool size | `10` |
    /// | `PLAN_TIP_SEED` | Seed for reproducible tips | (unset) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("PLANNER_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:4000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:health_planner.db?mode=rwc".to_string());

        let pool_size = match env::var("DB_POOL_SIZE") {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPoolSize(value))?,
            Err(_) => Database::DEFAULT_POOL_SIZE,
        };

        let tip_seed = match env::var("PLAN_TIP_SEED") {
            Ok(value) if !value.trim().is_empty() => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTipSeed(value.clone()))?,
            ),
            _ => None,
        };

        Ok(Self {
            addr,
            database_url,
            pool_size,
            tip_seed,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PLANNER_ADDR format")]
    InvalidAddr,

    #[error("DB_POOL_SIZE must be a positive integer, got {0:?}")]
    InvalidPoolSize(String),

    #[error("PLAN_TIP_SEED must be an unsigned integer, got {0:?}")]
    InvalidTipSeed(String),
}
