// ABOUTME: Request and response projections of the exercise entity
// ABOUTME: Summary, detail, create/update/delete shapes with boundary validation and sparse merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::patch::Patch;
use crate::constants::{defaults, limits};
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseLang, ExerciseTag, NewExercise};

fn default_title() -> String {
    defaults::EXERCISE_TITLE.to_owned()
}

/// Convert a requested difficulty into the stored representation
fn checked_difficulty(value: i64) -> AppResult<u32> {
    u32::try_from(value).map_err(|_| {
        AppError::invalid_input(format!(
            "difficulty must be between 0 and {}, got {value}",
            u32::MAX
        ))
    })
}

fn validate_title(title: &str) -> AppResult<()> {
    let length = title.chars().count();
    if length > limits::TITLE_MAX_LENGTH {
        return Err(AppError::invalid_input(format!(
            "title must be at most {} characters, got {length}",
            limits::TITLE_MAX_LENGTH
        )));
    }
    Ok(())
}

fn validate_image(field: &str, path: &str) -> AppResult<()> {
    let length = path.chars().count();
    if length > limits::IMAGE_PATH_MAX_LENGTH {
        return Err(AppError::invalid_input(format!(
            "{field} must be at most {} characters, got {length}",
            limits::IMAGE_PATH_MAX_LENGTH
        )));
    }
    Ok(())
}

/// List view of an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    /// Exercise identifier
    pub id: Uuid,
    /// Store-assigned ordinal
    pub seq_number: i64,
    /// Display title
    pub title: String,
    /// Difficulty level
    pub difficulty: u32,
    /// Preview image path
    pub preview_image: Option<String>,
    /// Exercise language
    pub lang: ExerciseLang,
    /// Ordered tags
    pub tags: Vec<ExerciseTag>,
}

impl From<Exercise> for ExerciseSummary {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            seq_number: exercise.seq_number,
            title: exercise.title,
            difficulty: exercise.difficulty,
            preview_image: exercise.preview_image,
            lang: exercise.lang,
            tags: exercise.tags,
        }
    }
}

/// Single-item view of an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDetail {
    /// Exercise identifier
    pub id: Uuid,
    /// Store-assigned ordinal
    pub seq_number: i64,
    /// Display title
    pub title: String,
    /// Difficulty level
    pub difficulty: u32,
    /// Preview image path
    pub preview_image: Option<String>,
    /// Background image path
    pub background_image: Option<String>,
    /// Referenced text
    pub text_id: Uuid,
    /// Exercise language
    pub lang: ExerciseLang,
    /// Ordered tags
    pub tags: Vec<ExerciseTag>,
}

impl From<Exercise> for ExerciseDetail {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            seq_number: exercise.seq_number,
            title: exercise.title,
            difficulty: exercise.difficulty,
            preview_image: exercise.preview_image,
            background_image: exercise.background_image,
            text_id: exercise.text_id,
            lang: exercise.lang,
            tags: exercise.tags,
        }
    }
}

/// Final state of an exercise after an update
pub type UpdateExerciseResponse = ExerciseDetail;

/// Acknowledgment returned by create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExerciseResponse {
    /// Assigned identifier
    pub id: Uuid,
    /// Assigned ordinal
    pub seq_number: i64,
}

impl From<&Exercise> for CreateExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            seq_number: exercise.seq_number,
        }
    }
}

/// Acknowledgment returned by delete, captured before removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteExerciseResponse {
    /// Identifier of the removed exercise
    pub id: Uuid,
    /// Ordinal of the removed exercise
    pub seq_number: i64,
}

impl From<&Exercise> for DeleteExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            seq_number: exercise.seq_number,
        }
    }
}

/// Fields accepted when creating an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    /// Difficulty level, must not be negative
    pub difficulty: i64,
    /// Display title, defaults to "generic exercise"
    #[serde(default = "default_title")]
    pub title: String,
    /// Preview image path
    #[serde(default)]
    pub preview_image: Option<String>,
    /// Background image path
    #[serde(default)]
    pub background_image: Option<String>,
    /// Referenced text
    pub text_id: Uuid,
    /// Exercise language, defaults to English
    #[serde(default)]
    pub lang: ExerciseLang,
    /// Ordered tags, defaults to none
    #[serde(default)]
    pub tags: Vec<ExerciseTag>,
}

impl CreateExerciseRequest {
    /// Request with only the required fields set
    #[must_use]
    pub fn new(difficulty: i64, text_id: Uuid) -> Self {
        Self {
            difficulty,
            title: default_title(),
            preview_image: None,
            background_image: None,
            text_id,
            lang: ExerciseLang::default(),
            tags: Vec::new(),
        }
    }

    /// Check field bounds
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        checked_difficulty(self.difficulty)?;
        validate_title(&self.title)?;
        if let Some(path) = &self.preview_image {
            validate_image("preview_image", path)?;
        }
        if let Some(path) = &self.background_image {
            validate_image("background_image", path)?;
        }
        Ok(())
    }

    /// Build the entity to insert under the given identifier
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if the request fails validation
    pub fn into_new_exercise(self, id: Uuid) -> AppResult<NewExercise> {
        self.validate()?;
        Ok(NewExercise {
            id,
            difficulty: checked_difficulty(self.difficulty)?,
            title: self.title,
            preview_image: self.preview_image,
            background_image: self.background_image,
            text_id: self.text_id,
            lang: self.lang,
            tags: self.tags,
        })
    }
}

/// Sparse update of an exercise
///
/// Omitted fields keep their stored value. `null` clears the nullable image
/// fields and is ignored for every other field. An explicit empty `tags` array
/// clears the tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateExerciseRequest {
    /// New difficulty
    #[serde(default)]
    pub difficulty: Patch<i64>,
    /// New title
    #[serde(default)]
    pub title: Patch<String>,
    /// New preview image, `null` to remove it
    #[serde(default)]
    pub preview_image: Patch<String>,
    /// New background image, `null` to remove it
    #[serde(default)]
    pub background_image: Patch<String>,
    /// New referenced text
    #[serde(default)]
    pub text_id: Patch<Uuid>,
    /// New language
    #[serde(default)]
    pub lang: Patch<ExerciseLang>,
    /// Replacement tag list
    #[serde(default)]
    pub tags: Patch<Vec<ExerciseTag>>,
}

impl UpdateExerciseRequest {
    /// Check bounds of every supplied field
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if let Some(difficulty) = self.difficulty.value() {
            checked_difficulty(*difficulty)?;
        }
        if let Some(title) = self.title.value() {
            validate_title(title)?;
        }
        if let Some(path) = self.preview_image.value() {
            validate_image("preview_image", path)?;
        }
        if let Some(path) = self.background_image.value() {
            validate_image("background_image", path)?;
        }
        Ok(())
    }

    /// Whether applying this request changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.difficulty.value().is_none()
            && self.title.value().is_none()
            && self.preview_image.is_absent()
            && self.background_image.is_absent()
            && self.text_id.value().is_none()
            && self.lang.value().is_none()
            && self.tags.value().is_none()
    }

    /// Merge the supplied fields into `exercise`
    ///
    /// `id` and `seq_number` are never touched.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if a supplied field is out of bounds; the
    /// exercise is left unmodified in that case
    pub fn apply(&self, exercise: &mut Exercise) -> AppResult<()> {
        self.validate()?;

        if let Some(difficulty) = self.difficulty.value() {
            exercise.difficulty = checked_difficulty(*difficulty)?;
        }
        if let Some(title) = self.title.value() {
            exercise.title.clone_from(title);
        }
        match &self.preview_image {
            Patch::Absent => {}
            Patch::Null => exercise.preview_image = None,
            Patch::Value(path) => exercise.preview_image = Some(path.clone()),
        }
        match &self.background_image {
            Patch::Absent => {}
            Patch::Null => exercise.background_image = None,
            Patch::Value(path) => exercise.background_image = Some(path.clone()),
        }
        if let Some(text_id) = self.text_id.value() {
            exercise.text_id = *text_id;
        }
        if let Some(lang) = self.lang.value() {
            exercise.lang = *lang;
        }
        if let Some(tags) = self.tags.value() {
            exercise.tags.clone_from(tags);
        }
        Ok(())
    }
}
