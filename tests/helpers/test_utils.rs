// ABOUTME: Fixture builders shared by integration tests
// ABOUTME: In-memory databases, wired server resources and sample exercises

use std::sync::Arc;

use exercise_service::config::ServerConfig;
use exercise_service::database::Database;
use exercise_service::models::{ExerciseLang, ExerciseTag, NewExercise};
use exercise_service::resources::ServerResources;
use exercise_service::schemas::CreateExerciseRequest;
use uuid::Uuid;

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Database {
    Database::in_memory()
        .await
        .expect("Failed to create in-memory database")
}

/// Server configuration pointing at an in-memory database
pub fn test_config() -> Arc<ServerConfig> {
    let mut config = ServerConfig::default();
    config.database = exercise_service::config::DatabaseConfig::in_memory();
    Arc::new(config)
}

/// Resources wired to a fresh in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    let database = create_test_database().await;
    Arc::new(ServerResources::new(database, test_config()))
}

/// Unsaved exercise with every field populated
pub fn sample_new_exercise(title: &str) -> NewExercise {
    NewExercise {
        id: Uuid::new_v4(),
        difficulty: 2,
        title: title.to_owned(),
        preview_image: Some("images/preview.png".to_owned()),
        background_image: None,
        text_id: Uuid::new_v4(),
        lang: ExerciseLang::English,
        tags: vec![ExerciseTag::Timit],
    }
}

/// Create request with every optional field populated
pub fn full_create_request(title: &str) -> CreateExerciseRequest {
    let mut request = CreateExerciseRequest::new(3, Uuid::new_v4());
    request.title = title.to_owned();
    request.preview_image = Some("images/preview.png".to_owned());
    request.background_image = Some("images/background.png".to_owned());
    request.tags = vec![ExerciseTag::Timit, ExerciseTag::Timit];
    request
}
