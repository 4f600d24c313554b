//! Note document model.
//!
//! # Responsibility
//! - Define the persisted note record and its JSON shape.
//! - Provide constructors and validation used before persistence.
//!
//! # Invariants
//! - `id` is stable and never reassigned after creation.
//! - `updated_at` is not earlier than `created_at`.
//! - Every stored stroke satisfies `Stroke::validate()`.

use crate::model::stroke::{Stroke, StrokeValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Title used for new notes and for notes saved with a blank title.
pub const UNTITLED: &str = "Untitled";

/// Stable note identifier. Generated notes use a UUID v4 string.
pub type NoteId = String;

/// Saved drawing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Strokes in drawing order; later strokes paint over earlier ones.
    pub strokes: Vec<Stroke>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Validation failures for note records.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteValidationError {
    EmptyId,
    InvalidStroke {
        index: usize,
        source: StrokeValidationError,
    },
    UpdatedBeforeCreated,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "note id cannot be empty"),
            Self::InvalidStroke { index, source } => write!(f, "stroke {index}: {source}"),
            Self::UpdatedBeforeCreated => write!(f, "updatedAt is earlier than createdAt"),
        }
    }
}

impl Error for NoteValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStroke { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Note {
    /// Creates an empty untitled note with a generated id.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), now)
    }

    /// Creates an empty untitled note with a caller-provided id.
    pub fn with_id(id: impl Into<NoteId>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: UNTITLED.to_string(),
            strokes: Vec::new(),
            created_at: now,
            updated_at: now,
            thumbnail: None,
        }
    }

    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.trim().is_empty() {
            return Err(NoteValidationError::EmptyId);
        }
        for (index, stroke) in self.strokes.iter().enumerate() {
            stroke
                .validate()
                .map_err(|source| NoteValidationError::InvalidStroke { index, source })?;
        }
        if self.updated_at < self.created_at {
            return Err(NoteValidationError::UpdatedBeforeCreated);
        }
        Ok(())
    }

    pub fn is_blank(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of sampled points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|stroke| stroke.points.len()).sum()
    }
}

/// Trims a title; blank input falls back to [`UNTITLED`].
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}
