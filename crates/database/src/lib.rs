//! SQLite persistence layer for the health planner.
//!
//! This crate provides async database operations for users, their health
//! goals, and generated weekly plans using SQLx with SQLite. Goals and plans
//! are keyed by user and removed along with their user.
//!
//! # Example
//!
//! ```no_run
//! use database::{goals, user, Database, User};
//! use plan_core::HealthGoals;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:health_planner.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Register a user
//!     let user = User {
//!         id: "lx3k9f2a8c".to_string(),
//!         name: "Alice".to_string(),
//!         age: 34,
//!         weight: 62.0,
//!         height: 168.0,
//!         health_conditions: None,
//!         created_at: String::new(),
//!     };
//!     user::upsert_user(db.pool(), &user).await?;
//!
//!     // Save their goals
//!     goals::upsert_goals(db.pool(), &HealthGoals::new(&user.id, 2000, 30, 2.5)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod goals;
pub mod models;
pub mod plan;
pub mod user;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::User;
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    pub const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/health_planner.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    ///
    /// Foreign keys are enabled so deleting a user cascades to their goals
    /// and plan.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Check that a connection can be acquired and queried.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
