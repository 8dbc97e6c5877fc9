// ABOUTME: Exercise entity model as persisted by the storage layer
// ABOUTME: Defines Exercise, NewExercise and the closed ExerciseLang / ExerciseTag enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Language an exercise is written in
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseLang {
    /// English
    #[default]
    English,
}

impl ExerciseLang {
    /// Every recognized language
    pub const ALL: &'static [Self] = &[Self::English];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
        }
    }

    /// Parse from database string representation
    ///
    /// Returns `None` for values outside the recognized set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lang| lang.as_str() == s)
    }
}

/// Tag classifying an exercise by its source corpus
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseTag {
    /// TIMIT speech corpus
    #[serde(rename = "TIMIT")]
    Timit,
}

impl ExerciseTag {
    /// Every recognized tag
    pub const ALL: &'static [Self] = &[Self::Timit];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timit => "TIMIT",
        }
    }

    /// Parse from database string representation
    ///
    /// Returns `None` for values outside the recognized set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.as_str() == s)
    }
}

/// A training exercise referencing an external text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Globally unique identifier, assigned once at creation
    pub id: Uuid,
    /// Store-assigned ordinal, unique and greater than zero
    pub seq_number: i64,
    /// Difficulty level
    pub difficulty: u32,
    /// Display title, at most 50 characters
    pub title: String,
    /// Preview image path, at most 500 characters
    pub preview_image: Option<String>,
    /// Background image path, at most 500 characters
    pub background_image: Option<String>,
    /// Text resource owned by another service
    pub text_id: Uuid,
    /// Exercise language
    pub lang: ExerciseLang,
    /// Ordered tags, duplicates allowed
    pub tags: Vec<ExerciseTag>,
}

/// An exercise that has not been persisted yet
///
/// Carries every field except `seq_number`, which the store assigns on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    /// Identifier chosen for the new exercise
    pub id: Uuid,
    /// Difficulty level
    pub difficulty: u32,
    /// Display title
    pub title: String,
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

impl NewExercise {
    /// Attach the store-assigned sequence number
    #[must_use]
    pub fn with_seq_number(self, seq_number: i64) -> Exercise {
        Exercise {
            id: self.id,
            seq_number,
            difficulty: self.difficulty,
            title: self.title,
            preview_image: self.preview_image,
            background_image: self.background_image,
            text_id: self.text_id,
            lang: self.lang,
            tags: self.tags,
        }
    }
}
