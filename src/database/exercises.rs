// ABOUTME: Exercise table schema bootstrap and row decoding
// ABOUTME: Encodes store-level constraints (uniqueness, non-negative difficulty, lengths, enum membership)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use super::{Database, DatabaseError};
use crate::constants::{defaults, limits};
use crate::models::{Exercise, ExerciseLang, ExerciseTag};

/// Column list shared by every query returning a full exercise row
pub(crate) const EXERCISE_COLUMNS: &str = "seq_number, id, difficulty, title, preview_image, \
     background_image, text_id, lang, tags";

impl Database {
    /// Create the exercises table
    pub(crate) async fn migrate_exercises(&self) -> Result<(), DatabaseError> {
        sqlx::query(&exercises_table_ddl())
            .execute(self.pool())
            .await?;
        Ok(())
    }
}

/// `CREATE TABLE` statement for exercises
///
/// `AUTOINCREMENT` keeps `seq_number` strictly increasing from 1 and prevents
/// reuse of numbers freed by deletes.
fn exercises_table_ddl() -> String {
    let langs = ExerciseLang::ALL
        .iter()
        .map(|lang| format!("'{}'", lang.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let title_max = limits::TITLE_MAX_LENGTH;
    let image_max = limits::IMAGE_PATH_MAX_LENGTH;
    let default_title = defaults::EXERCISE_TITLE.replace('\'', "''");
    let default_difficulty = defaults::EXERCISE_DIFFICULTY;
    let default_lang = ExerciseLang::default().as_str();

    format!(
        r"
        CREATE TABLE IF NOT EXISTS exercises (
            seq_number INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            difficulty INTEGER NOT NULL DEFAULT {default_difficulty}
                CONSTRAINT check_difficulty_non_neg CHECK (difficulty >= 0),
            title TEXT NOT NULL DEFAULT '{default_title}'
                CONSTRAINT check_title_length CHECK (length(title) <= {title_max}),
            preview_image TEXT
                CONSTRAINT check_preview_image_length
                CHECK (preview_image IS NULL OR length(preview_image) <= {image_max}),
            background_image TEXT
                CONSTRAINT check_background_image_length
                CHECK (background_image IS NULL OR length(background_image) <= {image_max}),
            text_id TEXT NOT NULL,
            lang TEXT NOT NULL DEFAULT '{default_lang}'
                CONSTRAINT check_lang_known CHECK (lang IN ({langs})),
            tags TEXT NOT NULL DEFAULT '[]'
                CONSTRAINT check_tags_json CHECK (json_valid(tags))
        )
        "
    )
}

/// Decode a row selected with [`EXERCISE_COLUMNS`]
pub(crate) fn row_to_exercise(row: &SqliteRow) -> Result<Exercise, DatabaseError> {
    let id: String = row.try_get("id")?;
    let text_id: String = row.try_get("text_id")?;
    let lang: String = row.try_get("lang")?;
    let tags: String = row.try_get("tags")?;

    Ok(Exercise {
        id: parse_uuid("id", &id)?,
        seq_number: row.try_get("seq_number")?,
        difficulty: row.try_get("difficulty")?,
        title: row.try_get("title")?,
        preview_image: row.try_get("preview_image")?,
        background_image: row.try_get("background_image")?,
        text_id: parse_uuid("text_id", &text_id)?,
        lang: ExerciseLang::parse(&lang)
            .ok_or_else(|| DatabaseError::InvalidData(format!("Unknown lang {lang:?}")))?,
        tags: decode_tags(&tags)?,
    })
}

/// Serialize tags to the JSON array stored in the `tags` column
pub(crate) fn encode_tags(tags: &[ExerciseTag]) -> Result<String, DatabaseError> {
    serde_json::to_string(tags)
        .map_err(|e| DatabaseError::InvalidData(format!("Cannot encode tags: {e}")))
}

fn decode_tags(raw: &str) -> Result<Vec<ExerciseTag>, DatabaseError> {
    serde_json::from_str(raw)
        .map_err(|e| DatabaseError::InvalidData(format!("Cannot decode tags {raw:?}: {e}")))
}

fn parse_uuid(column: &str, raw: &str) -> Result<Uuid, DatabaseError> {
    Uuid::parse_str(raw)
        .map_err(|e| DatabaseError::InvalidData(format!("Invalid {column} {raw:?}: {e}")))
}
