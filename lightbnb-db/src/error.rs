//! Structured error types for lightbnb-db.
//!
//! Every data-access call returns one of these instead of swallowing the
//! failure, so callers can tell "no such row" apart from "the query failed".

use thiserror::Error;

/// Main error type for data-access operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Single-row lookup matched nothing
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Unique or foreign key constraint rejected the statement
    #[error("conflict on {resource}: {reason}")]
    Conflict {
        resource: &'static str,
        reason: String,
    },

    /// Query could not be executed (connectivity, syntax, decoding)
    #[error("database error: {0}")]
    Execution(#[from] sqlx::Error),

    /// Configuration value missing or malformed
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for lightbnb-db operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a not-found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Classify a failed insert.
    ///
    /// Constraint violations become `Conflict`, everything else stays an
    /// `Execution` error.
    pub fn from_insert(resource: &'static str, err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation() || db_err.is_foreign_key_violation() =>
            {
                Self::Conflict {
                    resource,
                    reason: db_err.message().to_owned(),
                }
            }
            _ => Self::Execution(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
