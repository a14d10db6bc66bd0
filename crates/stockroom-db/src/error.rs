//! # Database Error Types
//!
//! Error types for database operations and the startup seeder.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)          io::Error / serde_json::Error     │
//! │       │                                      │                          │
//! │       ▼                                      │                          │
//! │  DbError (this module)                       │                          │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  SeedError ◄─────────────────────────────────┘                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  anyhow::Error in main → non-zero exit                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is retried or recovered; every error aborts startup.

use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    #[error("{entity} not found: {id}")]
    NotFound {
        entity: String,
        id: String,
    },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Runtime SQL error reported by SQLite (e.g. missing table)
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Begin or commit of a batch transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors raised by the startup seeder.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The item store rejected the insert or the read.
    #[error("Item store failed: {0}")]
    Store(#[from] DbError),

    /// Writing a line to the output sink failed.
    #[error("Failed to write item to output: {0}")]
    Output(#[from] std::io::Error),

    /// An item could not be encoded as JSON.
    #[error("Failed to encode item as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Item", 42);
        assert_eq!(err.to_string(), "Item not found: 42");
    }

    #[test]
    fn test_pool_closed_maps_to_connection_failed() {
        let err = DbError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[test]
    fn test_seed_error_wraps_db_error() {
        let err = SeedError::from(DbError::PoolExhausted);
        assert_eq!(err.to_string(), "Item store failed: Connection pool exhausted");
    }
}
