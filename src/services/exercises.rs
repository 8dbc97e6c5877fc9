// ABOUTME: Exercise lifecycle service orchestrating list/get/create/update/delete
// ABOUTME: Applies sparse update merges and maps storage failures to caller-facing error kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::database::{DatabaseError, ExerciseRepository};
use crate::errors::{AppError, AppResult};
use crate::models::Exercise;
use crate::pagination::{Page, PageRequest};
use crate::schemas::{
    CreateExerciseRequest, CreateExerciseResponse, DeleteExerciseResponse, ExerciseDetail,
    ExerciseSummary, UpdateExerciseRequest, UpdateExerciseResponse,
};

const CONFLICT_MESSAGE: &str = "Exercise with this data already exists.";

/// Source of identifiers for new exercises
pub type IdGenerator = Arc<dyn Fn() -> Uuid + Send + Sync>;

/// Write operation a storage failure occurred in, used for messages
#[derive(Debug, Clone, Copy)]
enum WriteOp {
    Create,
    Update,
    Delete,
}

impl WriteOp {
    const fn verb(self) -> &'static str {
        match self {
            Self::Create => "creating",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }
}

/// Exercise resource lifecycle
///
/// Each operation is an independent unit of work. Writes are single
/// transactions owned by the repository, which rolls back before any error
/// reaches this layer. Nothing is retried.
#[derive(Clone)]
pub struct ExerciseService {
    repository: Arc<dyn ExerciseRepository>,
    id_generator: IdGenerator,
}

impl fmt::Debug for ExerciseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExerciseService").finish_non_exhaustive()
    }
}

impl ExerciseService {
    /// Service over `repository` assigning random v4 identifiers
    #[must_use]
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self::with_id_generator(repository, Arc::new(Uuid::new_v4))
    }

    /// Service with a custom identifier source
    #[must_use]
    pub fn with_id_generator(
        repository: Arc<dyn ExerciseRepository>,
        id_generator: IdGenerator,
    ) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// One page of exercise summaries ordered by sequence number
    ///
    /// The page and the total come from two independent reads and may disagree
    /// under concurrent writes.
    ///
    /// # Errors
    ///
    /// Returns an internal error if either read fails
    pub async fn list(&self, request: PageRequest) -> AppResult<Page<ExerciseSummary>> {
        let exercises = self
            .repository
            .find_page(request.skip(), request.limit())
            .await
            .map_err(|e| read_error("listing exercises", e))?;
        let total = self
            .repository
            .count()
            .await
            .map_err(|e| read_error("counting exercises", e))?;

        debug!(
            page = request.page(),
            size = request.size(),
            returned = exercises.len(),
            total,
            "Listed exercises"
        );
        Ok(Page::new(exercises, request, total).map(ExerciseSummary::from))
    }

    /// Full view of one exercise
    ///
    /// # Errors
    ///
    /// Returns not-found if no exercise has this id, or an internal error if the
    /// read fails
    pub async fn get(&self, id: Uuid) -> AppResult<ExerciseDetail> {
        self.load(id).await.map(ExerciseDetail::from)
    }

    /// Persist a new exercise
    ///
    /// # Errors
    ///
    /// Returns invalid-input before touching storage if the request is out of
    /// bounds, conflict on a uniqueness violation, internal error otherwise
    pub async fn create(&self, request: CreateExerciseRequest) -> AppResult<CreateExerciseResponse> {
        let new_exercise = request.into_new_exercise((self.id_generator)())?;

        let created = self
            .repository
            .insert(new_exercise)
            .await
            .map_err(|e| write_error(WriteOp::Create, e))?;

        info!(id = %created.id, seq_number = created.seq_number, "Exercise created");
        Ok(CreateExerciseResponse::from(&created))
    }

    /// Merge the supplied fields into an existing exercise
    ///
    /// # Errors
    ///
    /// Returns invalid-input if a supplied field is out of bounds, not-found if
    /// the exercise does not exist (or vanished before the write), conflict on a
    /// uniqueness violation, internal error otherwise
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateExerciseRequest,
    ) -> AppResult<UpdateExerciseResponse> {
        request.validate()?;

        let mut exercise = self.load(id).await?;
        request.apply(&mut exercise)?;
        if request.is_empty() {
            debug!(%id, "Update request carries no changes");
        }

        let updated = self
            .repository
            .update(&exercise)
            .await
            .map_err(|e| write_error(WriteOp::Update, e))?;

        info!(id = %updated.id, seq_number = updated.seq_number, "Exercise updated");
        Ok(UpdateExerciseResponse::from(updated))
    }

    /// Remove an exercise permanently
    ///
    /// # Errors
    ///
    /// Returns not-found if the exercise does not exist, internal error if the
    /// delete fails
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteExerciseResponse> {
        let exercise = self.load(id).await?;
        let response = DeleteExerciseResponse::from(&exercise);

        self.repository
            .delete(&exercise)
            .await
            .map_err(|e| write_error(WriteOp::Delete, e))?;

        info!(id = %response.id, seq_number = response.seq_number, "Exercise deleted");
        Ok(response)
    }

    async fn load(&self, id: Uuid) -> AppResult<Exercise> {
        self.repository
            .find(id)
            .await
            .map_err(|e| read_error("loading exercise", e))?
            .ok_or_else(|| AppError::not_found("Exercise"))
    }
}

fn read_error(context: &str, error: DatabaseError) -> AppError {
    error!(error = %error, "Failed {context}");
    AppError::database(format!("An error occurred while {context}.")).with_source(error)
}

fn write_error(op: WriteOp, error: DatabaseError) -> AppError {
    match error {
        DatabaseError::UniqueViolation { .. } => {
            warn!(error = %error, "Exercise write rejected by uniqueness constraint");
            AppError::already_exists(CONFLICT_MESSAGE).with_source(error)
        }
        DatabaseError::NotFound { .. } => {
            warn!(error = %error, "Exercise vanished before {} completed", op.verb());
            AppError::not_found("Exercise").with_source(error)
        }
        other => {
            error!(error = %other, "Storage failure while {} exercise", op.verb());
            AppError::database(format!("An error occurred while {} exercise.", op.verb()))
                .with_source(other)
        }
    }
}
