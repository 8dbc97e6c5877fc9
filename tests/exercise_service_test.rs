// ABOUTME: Integration tests for the exercise lifecycle service
// ABOUTME: Runs against SQLite and against a scripted storage stub to check error-kind mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use exercise_service::database::{DatabaseError, ExerciseRepository, ExerciseRepositoryImpl};
use exercise_service::errors::ErrorKind;
use exercise_service::models::{Exercise, ExerciseLang, ExerciseTag, NewExercise};
use exercise_service::pagination::PageRequest;
use exercise_service::schemas::{CreateExerciseRequest, UpdateExerciseRequest};
use exercise_service::services::ExerciseService;
use helpers::test_utils::{create_test_database, full_create_request};
use uuid::Uuid;

async fn sqlite_service() -> ExerciseService {
    let db = create_test_database().await;
    ExerciseService::new(Arc::new(ExerciseRepositoryImpl::new(&db)))
}

/// Storage stub that fails every write with a fixed error and counts calls
struct ScriptedRepository {
    stored: Exercise,
    write_error: fn() -> DatabaseError,
    writes: AtomicUsize,
}

impl ScriptedRepository {
    fn new(write_error: fn() -> DatabaseError) -> Self {
        Self {
            stored: Exercise {
                id: Uuid::new_v4(),
                seq_number: 1,
                difficulty: 1,
                title: "stub".to_owned(),
                preview_image: None,
                background_image: None,
                text_id: Uuid::new_v4(),
                lang: ExerciseLang::English,
                tags: Vec::new(),
            },
            write_error,
            writes: AtomicUsize::new(0),
        }
    }

    fn fail(&self) -> DatabaseError {
        self.writes.fetch_add(1, Ordering::SeqCst);
        (self.write_error)()
    }
}

#[async_trait]
impl ExerciseRepository for ScriptedRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Exercise>, DatabaseError> {
        Ok((id == self.stored.id).then(|| self.stored.clone()))
    }

    async fn find_page(&self, _skip: i64, _limit: i64) -> Result<Vec<Exercise>, DatabaseError> {
        Err(DatabaseError::ConnectionError("pool closed".to_owned()))
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        Ok(1)
    }

    async fn insert(&self, _exercise: NewExercise) -> Result<Exercise, DatabaseError> {
        Err(self.fail())
    }

    async fn update(&self, _exercise: &Exercise) -> Result<Exercise, DatabaseError> {
        Err(self.fail())
    }

    async fn delete(&self, _exercise: &Exercise) -> Result<(), DatabaseError> {
        Err(self.fail())
    }
}

fn unique_violation() -> DatabaseError {
    DatabaseError::UniqueViolation {
        details: "UNIQUE constraint failed: exercises.id".to_owned(),
    }
}

fn connection_lost() -> DatabaseError {
    DatabaseError::ConnectionError("connection reset".to_owned())
}

fn row_vanished() -> DatabaseError {
    DatabaseError::NotFound {
        entity: "Exercise",
        id: "raced".to_owned(),
    }
}

#[tokio::test]
async fn test_create_then_get_returns_request_fields() {
    let service = sqlite_service().await;
    let request = full_create_request("Fricatives");

    let created = service.create(request.clone()).await.unwrap();
    assert!(created.seq_number > 0);

    let detail = service.get(created.id).await.unwrap();
    assert_eq!(detail.id, created.id);
    assert_eq!(detail.seq_number, created.seq_number);
    assert_eq!(detail.title, request.title);
    assert_eq!(i64::from(detail.difficulty), request.difficulty);
    assert_eq!(detail.preview_image, request.preview_image);
    assert_eq!(detail.background_image, request.background_image);
    assert_eq!(detail.text_id, request.text_id);
    assert_eq!(detail.lang, request.lang);
    assert_eq!(detail.tags, request.tags);
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let service = sqlite_service().await;
    let text_id = Uuid::new_v4();

    let created = service
        .create(CreateExerciseRequest::new(0, text_id))
        .await
        .unwrap();
    let detail = service.get(created.id).await.unwrap();

    assert_eq!(detail.title, "generic exercise");
    assert_eq!(detail.difficulty, 0);
    assert_eq!(detail.lang, ExerciseLang::English);
    assert!(detail.tags.is_empty());
    assert_eq!(detail.preview_image, None);
    assert_eq!(detail.text_id, text_id);
}

#[tokio::test]
async fn test_negative_difficulty_rejected_before_storage() {
    let repository = Arc::new(ScriptedRepository::new(connection_lost));
    let service = ExerciseService::new(repository.clone());

    let error = service
        .create(CreateExerciseRequest::new(-1, Uuid::new_v4()))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidRequest);
    assert_eq!(repository.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_list_paginates_in_seq_order() {
    let service = sqlite_service().await;
    for n in 0..21 {
        service
            .create(full_create_request(&format!("exercise {n}")))
            .await
            .unwrap();
    }

    let page = service.list(PageRequest::new(3, 10).unwrap()).await.unwrap();
    assert_eq!(page.total, 21);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
    assert_eq!(page.size, 10);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].seq_number, 21);
    assert_eq!(page.items[0].title, "exercise 20");

    let first = service.list(PageRequest::new(1, 10).unwrap()).await.unwrap();
    let seq_numbers: Vec<i64> = first.items.iter().map(|e| e.seq_number).collect();
    assert_eq!(seq_numbers, (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_list_of_empty_store() {
    let service = sqlite_service().await;
    let page = service.list(PageRequest::new(1, 10).unwrap()).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_partial_update_changes_only_difficulty() {
    let service = sqlite_service().await;
    let request = full_create_request("Nasals");
    let created = service.create(request.clone()).await.unwrap();

    let update: UpdateExerciseRequest = serde_json::from_str(r#"{"difficulty": 8}"#).unwrap();
    let updated = service.update(created.id, update).await.unwrap();

    assert_eq!(updated.difficulty, 8);
    assert_eq!(updated.title, request.title);
    assert_eq!(updated.tags, request.tags);
    assert_eq!(updated.text_id, request.text_id);
    assert_eq!(updated.background_image, request.background_image);
    assert_eq!(updated.seq_number, created.seq_number);
    assert_eq!(service.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_with_empty_tags_clears_them() {
    let service = sqlite_service().await;
    let created = service.create(full_create_request("Glides")).await.unwrap();

    let untouched: UpdateExerciseRequest = serde_json::from_str(r#"{"title": "Glides 2"}"#).unwrap();
    let updated = service.update(created.id, untouched).await.unwrap();
    assert_eq!(updated.tags, vec![ExerciseTag::Timit, ExerciseTag::Timit]);

    let clear: UpdateExerciseRequest = serde_json::from_str(r#"{"tags": []}"#).unwrap();
    let cleared = service.update(created.id, clear).await.unwrap();
    assert!(cleared.tags.is_empty());
    assert_eq!(cleared.title, "Glides 2");
}

#[tokio::test]
async fn test_empty_update_returns_current_state() {
    let service = sqlite_service().await;
    let created = service.create(full_create_request("Liquids")).await.unwrap();
    let before = service.get(created.id).await.unwrap();

    let after = service
        .update(created.id, UpdateExerciseRequest::default())
        .await
        .unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_update_validation_leaves_store_untouched() {
    let service = sqlite_service().await;
    let created = service.create(full_create_request("Affricates")).await.unwrap();
    let before = service.get(created.id).await.unwrap();

    let update: UpdateExerciseRequest =
        serde_json::from_value(serde_json::json!({ "title": "t".repeat(51) })).unwrap();
    let error = service.update(created.id, update).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidRequest);
    assert_eq!(service.get(created.id).await.unwrap(), before);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let service = sqlite_service().await;
    let missing = Uuid::new_v4();

    assert_eq!(service.get(missing).await.unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(
        service
            .update(missing, UpdateExerciseRequest::default())
            .await
            .unwrap_err()
            .kind(),
        ErrorKind::NotFound
    );
    assert_eq!(service.delete(missing).await.unwrap_err().kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = sqlite_service().await;
    let created = service.create(full_create_request("Vowels")).await.unwrap();

    let deleted = service.delete(created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.seq_number, created.seq_number);

    let error = service.get(created.id).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(error.message, "Exercise not found.");
}

#[tokio::test]
async fn test_concurrent_colliding_creates_yield_one_conflict() {
    let db = create_test_database().await;
    let repository = Arc::new(ExerciseRepositoryImpl::new(&db));
    let fixed_id = Uuid::new_v4();
    let service = ExerciseService::with_id_generator(repository.clone(), Arc::new(move || fixed_id));

    let (left, right) = tokio::join!(
        service.create(full_create_request("left")),
        service.create(full_create_request("right")),
    );

    let errors: Vec<_> = [left, right].into_iter().filter_map(Result::err).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Conflict);
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_storage_failures_map_to_error_kinds() {
    let conflict = Arc::new(ScriptedRepository::new(unique_violation));
    let service = ExerciseService::new(conflict.clone());
    let error = service.create(full_create_request("x")).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Conflict);
    assert_eq!(error.message, "Exercise with this data already exists.");

    let update: UpdateExerciseRequest = serde_json::from_str(r#"{"difficulty": 1}"#).unwrap();
    let error = service.update(conflict.stored.id, update.clone()).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Conflict);

    let broken = Arc::new(ScriptedRepository::new(connection_lost));
    let service = ExerciseService::new(broken.clone());
    let error = service.create(full_create_request("x")).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InternalError);
    assert_eq!(error.message, "An error occurred while creating exercise.");
    let error = service.update(broken.stored.id, update.clone()).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InternalError);
    let error = service.delete(broken.stored.id).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InternalError);
    let error = service.list(PageRequest::new(1, 10).unwrap()).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InternalError);

    let raced = Arc::new(ScriptedRepository::new(row_vanished));
    let service = ExerciseService::new(raced.clone());
    let error = service.update(raced.stored.id, update).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

fn connection_refused_with_host() -> DatabaseError {
    DatabaseError::ConnectionError("host=db:5432 refused".to_owned())
}

#[tokio::test]
async fn test_storage_failure_messages_hide_driver_detail() {
    let repository = Arc::new(ScriptedRepository::new(connection_refused_with_host));
    let service = ExerciseService::new(repository.clone());

    let create = service.create(full_create_request("x")).await.unwrap_err();
    let delete = service.delete(repository.stored.id).await.unwrap_err();
    let list = service.list(PageRequest::new(1, 10).unwrap()).await.unwrap_err();

    assert_eq!(create.message, "An error occurred while creating exercise.");
    assert_eq!(delete.message, "An error occurred while deleting exercise.");
    assert_eq!(list.message, "An error occurred while listing exercises.");
    for error in [&create, &delete, &list] {
        assert_eq!(error.kind(), ErrorKind::InternalError);
        assert!(!error.message.contains("host="), "{}", error.message);
        assert!(!error.to_string().contains("host="), "{error}");
    }
    assert!(create.source.is_some());
}
