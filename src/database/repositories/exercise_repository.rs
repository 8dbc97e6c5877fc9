// ABOUTME: SQLite implementation of the exercise storage port
// ABOUTME: Reads go straight to the pool, writes run inside a TransactionGuard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::ExerciseRepository;
use crate::database::exercises::{encode_tags, row_to_exercise, EXERCISE_COLUMNS};
use crate::database::transactions::SqliteTransactionGuard;
use crate::database::{Database, DatabaseError};
use crate::models::{Exercise, NewExercise};

const ENTITY: &str = "Exercise";

/// `SQLite` implementation of `ExerciseRepository`
#[derive(Clone)]
pub struct ExerciseRepositoryImpl {
    pool: SqlitePool,
}

impl ExerciseRepositoryImpl {
    /// Create a new `ExerciseRepository` over the given database
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl ExerciseRepository for ExerciseRepositoryImpl {
    async fn find(&self, id: Uuid) -> Result<Option<Exercise>, DatabaseError> {
        let query = format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn find_page(&self, skip: i64, limit: i64) -> Result<Vec<Exercise>, DatabaseError> {
        let query = format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises ORDER BY seq_number ASC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_exercise).collect()
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn insert(&self, exercise: NewExercise) -> Result<Exercise, DatabaseError> {
        let mut guard = SqliteTransactionGuard::begin(&self.pool).await?;
        let result = insert_exercise(guard.executor()?, exercise).await;
        let created = guard.finish(result).await?;
        debug!(id = %created.id, seq_number = created.seq_number, "Exercise inserted");
        Ok(created)
    }

    async fn update(&self, exercise: &Exercise) -> Result<Exercise, DatabaseError> {
        let mut guard = SqliteTransactionGuard::begin(&self.pool).await?;
        let result = update_exercise(guard.executor()?, exercise).await;
        guard.finish(result).await
    }

    async fn delete(&self, exercise: &Exercise) -> Result<(), DatabaseError> {
        let mut guard = SqliteTransactionGuard::begin(&self.pool).await?;
        let result = delete_exercise(guard.executor()?, exercise.id).await;
        guard.finish(result).await
    }
}

async fn insert_exercise(
    conn: &mut SqliteConnection,
    exercise: NewExercise,
) -> Result<Exercise, DatabaseError> {
    let tags = encode_tags(&exercise.tags)?;
    let seq_number: i64 = sqlx::query_scalar(
        r"
        INSERT INTO exercises
            (id, difficulty, title, preview_image, background_image, text_id, lang, tags)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING seq_number
        ",
    )
    .bind(exercise.id.to_string())
    .bind(exercise.difficulty)
    .bind(&exercise.title)
    .bind(exercise.preview_image.as_deref())
    .bind(exercise.background_image.as_deref())
    .bind(exercise.text_id.to_string())
    .bind(exercise.lang.as_str())
    .bind(tags)
    .fetch_one(&mut *conn)
    .await?;

    Ok(exercise.with_seq_number(seq_number))
}

async fn update_exercise(
    conn: &mut SqliteConnection,
    exercise: &Exercise,
) -> Result<Exercise, DatabaseError> {
    let query = format!(
        r"
        UPDATE exercises
        SET difficulty = $1, title = $2, preview_image = $3, background_image = $4,
            text_id = $5, lang = $6, tags = $7
        WHERE id = $8
        RETURNING {EXERCISE_COLUMNS}
        "
    );
    let row = sqlx::query(&query)
        .bind(exercise.difficulty)
        .bind(&exercise.title)
        .bind(exercise.preview_image.as_deref())
        .bind(exercise.background_image.as_deref())
        .bind(exercise.text_id.to_string())
        .bind(exercise.lang.as_str())
        .bind(encode_tags(&exercise.tags)?)
        .bind(exercise.id.to_string())
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: ENTITY,
            id: exercise.id.to_string(),
        })?;

    row_to_exercise(&row)
}

async fn delete_exercise(conn: &mut SqliteConnection, id: Uuid) -> Result<(), DatabaseError> {
    let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
        .bind(id.to_string())
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: ENTITY,
            id: id.to_string(),
        });
    }
    Ok(())
}
