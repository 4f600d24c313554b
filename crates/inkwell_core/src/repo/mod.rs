//! Repository layer over the key-value store.
//!
//! # Responsibility
//! - Define use-case oriented persistence contracts for notes and settings.
//! - Keep JSON collection layout details inside the persistence boundary.
//!
//! # Invariants
//! - Each operation reads the whole collection and writes the whole
//!   collection back; there is no partial write or index.
//! - Read failures degrade to empty/default values and are logged.
//! - Write failures are returned to the caller.

use crate::model::note::NoteValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod settings_repo;

/// Store key holding the JSON array of notes.
pub const NOTES_KEY: &str = "inkwell_notes";
/// Store key holding the JSON settings record.
pub const SETTINGS_KEY: &str = "inkwell_settings";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence writes.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Store(StoreError),
    /// Stored JSON could not be encoded or decoded.
    Serialization(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid note: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "invalid persisted json: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
