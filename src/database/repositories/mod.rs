// ABOUTME: Storage port for exercises, decoupling the service layer from SQL
// ABOUTME: Defines the ExerciseRepository trait and re-exports its SQLite implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Repository Pattern
//!
//! The service layer depends on [`ExerciseRepository`] only. Failures are
//! reported as [`DatabaseError`] so callers can tell uniqueness violations and
//! vanished rows apart from everything else.

/// `SQLite` implementation of the exercise storage port
pub mod exercise_repository;

use async_trait::async_trait;
use uuid::Uuid;

pub use exercise_repository::ExerciseRepositoryImpl;

use crate::errors::DatabaseError;
use crate::models::{Exercise, NewExercise};

/// Exercise persistence operations
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Look up one exercise by id
    async fn find(&self, id: Uuid) -> Result<Option<Exercise>, DatabaseError>;

    /// Window of exercises ordered by ascending sequence number
    async fn find_page(&self, skip: i64, limit: i64) -> Result<Vec<Exercise>, DatabaseError>;

    /// Total number of stored exercises
    async fn count(&self) -> Result<i64, DatabaseError>;

    /// Persist a new exercise and return it with its assigned sequence number
    ///
    /// Fails with [`DatabaseError::UniqueViolation`] when the id is taken.
    async fn insert(&self, exercise: NewExercise) -> Result<Exercise, DatabaseError>;

    /// Overwrite every mutable column of an existing exercise
    ///
    /// Fails with [`DatabaseError::NotFound`] when the row no longer exists.
    async fn update(&self, exercise: &Exercise) -> Result<Exercise, DatabaseError>;

    /// Remove an exercise
    ///
    /// Fails with [`DatabaseError::NotFound`] when the row no longer exists.
    async fn delete(&self, exercise: &Exercise) -> Result<(), DatabaseError>;
}
