// ABOUTME: Structured error types for storage operations
// ABOUTME: Classifies sqlx failures into uniqueness, constraint, connection and query errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by the storage port
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A write collided with a uniqueness constraint
    #[error("Uniqueness constraint violated: {details}")]
    UniqueViolation {
        /// Driver message naming the constraint
        details: String,
    },

    /// A check, not-null or foreign-key constraint rejected the write
    #[error("Constraint violated: {details}")]
    ConstraintViolation {
        /// Driver message naming the constraint
        details: String,
    },

    /// A write targeted a row that no longer exists
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity type
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// The store could not be reached
    #[error("Database connection failed: {0}")]
    ConnectionError(String),

    /// A query failed for any other reason
    #[error("Query failed: {context}")]
    QueryError {
        /// Failure detail
        context: String,
    },

    /// A stored row could not be decoded into an entity
    #[error("Stored data is invalid: {0}")]
    InvalidData(String),

    /// Beginning, committing or rolling back a transaction failed
    #[error("Transaction failed: {0}")]
    TransactionError(String),
}

impl DatabaseError {
    /// Whether this error is a uniqueness violation
    #[must_use]
    pub const fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &error {
            sqlx::Error::Database(db_error) => {
                let details = db_error.message().to_owned();
                match db_error.kind() {
                    ErrorKind::UniqueViolation => Self::UniqueViolation { details },
                    ErrorKind::CheckViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::ForeignKeyViolation => Self::ConstraintViolation { details },
                    _ => Self::QueryError { context: details },
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::ConnectionError(error.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::TypeNotFound { .. } => Self::InvalidData(error.to_string()),
            _ => Self::QueryError {
                context: error.to_string(),
            },
        }
    }
}
