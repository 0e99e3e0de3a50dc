//! Database error types.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A JSON column could not be encoded or decoded.
    #[error("corrupt {column} column: {source}")]
    Json {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value cannot be represented in the domain type.
    #[error("invalid value in {column}: {value}")]
    Corrupt { column: &'static str, value: String },
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Map a write against a missing owning user to [`DatabaseError::NotFound`].
pub(crate) fn owner_violation(err: sqlx::Error, user_id: &str) -> DatabaseError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_foreign_key_violation() {
            return DatabaseError::NotFound {
                entity: "User",
                id: user_id.to_string(),
            };
        }
    }
    DatabaseError::Sqlx(err)
}
