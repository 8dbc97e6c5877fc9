// ABOUTME: Transaction management with an RAII guard for multi-statement writes
// ABOUTME: Commits on success and rolls back explicitly when the unit of work fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! RAII transaction guard
//!
//! Every mutating storage operation runs inside a `TransactionGuard`. The usual
//! shape is:
//!
//! ```text
//! let mut guard = TransactionGuard::begin(&pool).await?;
//! let result = insert_row(guard.executor()?).await;
//! guard.finish(result).await
//! ```
//!
//! `finish` commits when the unit of work succeeded and rolls back otherwise.
//! A guard dropped without either still rolls back through `SQLx`.

use sqlx::{Database as SqlxDatabase, Pool, Transaction};
use tracing::{debug, warn};

use crate::errors::DatabaseError;

/// RAII guard around a `SQLx` transaction
pub struct TransactionGuard<'c, DB: SqlxDatabase> {
    transaction: Option<Transaction<'c, DB>>,
}

impl<DB: SqlxDatabase> TransactionGuard<'static, DB> {
    /// Begin a transaction on `pool`
    ///
    /// # Errors
    ///
    /// Returns an error if no connection could be acquired or `BEGIN` failed
    pub async fn begin(pool: &Pool<DB>) -> Result<Self, DatabaseError> {
        let transaction = pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionError(format!("Begin failed: {e}")))?;
        debug!("Transaction started");
        Ok(Self::new(transaction))
    }
}

impl<'c, DB: SqlxDatabase> TransactionGuard<'c, DB> {
    fn new(transaction: Transaction<'c, DB>) -> Self {
        Self {
            transaction: Some(transaction),
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or the commit failed
    pub async fn commit(mut self) -> Result<(), DatabaseError> {
        let tx = self.transaction.take().ok_or_else(|| {
            DatabaseError::TransactionError("Transaction already consumed".to_owned())
        })?;
        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionError(format!("Commit failed: {e}")))?;
        debug!("Transaction committed");
        Ok(())
    }

    /// Roll the transaction back and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or the rollback failed
    pub async fn rollback(mut self) -> Result<(), DatabaseError> {
        let tx = self.transaction.take().ok_or_else(|| {
            DatabaseError::TransactionError("Transaction already consumed".to_owned())
        })?;
        tx.rollback()
            .await
            .map_err(|e| DatabaseError::TransactionError(format!("Rollback failed: {e}")))?;
        debug!("Transaction rolled back");
        Ok(())
    }

    /// Commit if `result` is `Ok`, otherwise roll back and return the original error
    ///
    /// A failed rollback is logged; the caller still sees the error that caused it.
    ///
    /// # Errors
    ///
    /// Returns the unit-of-work error, or the commit error
    pub async fn finish<T>(self, result: Result<T, DatabaseError>) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = self.rollback().await {
                    warn!(
                        error = %error,
                        rollback_error = %rollback_error,
                        "Rollback after failed write did not complete"
                    );
                }
                Err(error)
            }
        }
    }

    /// Connection to execute statements on
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already committed or rolled back
    pub fn executor(&mut self) -> Result<&mut <DB as SqlxDatabase>::Connection, DatabaseError> {
        self.transaction.as_deref_mut().ok_or_else(|| {
            DatabaseError::TransactionError("Guard used after commit or rollback".to_owned())
        })
    }
}

impl<DB: SqlxDatabase> Drop for TransactionGuard<'_, DB> {
    fn drop(&mut self) {
        if self.transaction.is_some() {
            warn!("TransactionGuard dropped without commit, rolling back");
        }
    }
}

/// `SQLite` transaction guard
pub type SqliteTransactionGuard<'c> = TransactionGuard<'c, sqlx::Sqlite>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;

    async fn count_rows(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    async fn insert_row(conn: &mut sqlx::SqliteConnection) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO exercises (id, text_id) VALUES ($1, $2)")
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(uuid::Uuid::new_v4().to_string())
            .execute(conn)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_finish_commits_on_success() {
        let db = Database::in_memory().await.unwrap();
        let mut guard = SqliteTransactionGuard::begin(db.pool()).await.unwrap();
        let result = insert_row(guard.executor().unwrap()).await;
        guard.finish(result).await.unwrap();

        assert_eq!(count_rows(&db).await, 1);
    }

    #[tokio::test]
    async fn test_finish_rolls_back_on_error() {
        let db = Database::in_memory().await.unwrap();
        let mut guard = SqliteTransactionGuard::begin(db.pool()).await.unwrap();
        insert_row(guard.executor().unwrap()).await.unwrap();

        let failure: Result<(), DatabaseError> =
            Err(DatabaseError::InvalidData("second statement failed".to_owned()));
        let error = guard.finish(failure).await.unwrap_err();

        assert!(matches!(error, DatabaseError::InvalidData(_)));
        assert_eq!(count_rows(&db).await, 0);
    }

    #[tokio::test]
    async fn test_dropped_guard_rolls_back() {
        let db = Database::in_memory().await.unwrap();
        {
            let mut guard = SqliteTransactionGuard::begin(db.pool()).await.unwrap();
            insert_row(guard.executor().unwrap()).await.unwrap();
        }

        assert_eq!(count_rows(&db).await, 0);
    }
}
