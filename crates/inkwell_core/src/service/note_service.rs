//! Note use-case service.
//!
//! # Responsibility
//! - Start and reopen canvas editing sessions.
//! - Save sessions/notes with refreshed timestamps and normalized titles.
//! - Project stored notes into gallery cards.
//!
//! # Invariants
//! - `updated_at` is refreshed on every successful save.
//! - Note list is always sorted by `updated_at DESC, id ASC`.
//! - Service layer remains storage-agnostic.

use crate::canvas::session::CanvasSession;
use crate::model::note::{normalize_title, Note, NoteId};
use crate::model::pen::Theme;
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoError;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Gallery list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    /// Relative label such as `Today`, `3 days ago` or `Jan 5`.
    pub updated_label: String,
    pub stroke_count: usize,
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Starts editing a brand-new, not yet persisted note.
    pub fn start_new_session(&self, theme: Theme) -> CanvasSession {
        CanvasSession::open(Note::new(Utc::now()), theme, true)
    }

    /// Reopens a stored note for editing.
    pub fn open_session(&self, id: &str, theme: Theme) -> Result<CanvasSession, NoteServiceError> {
        let note = self
            .repo
            .get_note(id)
            .ok_or_else(|| NoteServiceError::NoteNotFound(id.to_string()))?;
        Ok(CanvasSession::open(note, theme, false))
    }

    /// Persists the session's note stamped with the current time.
    pub fn save_session(&mut self, session: &CanvasSession) -> Result<Note, NoteServiceError> {
        self.save_session_at(session, Utc::now())
    }

    pub fn save_session_at(
        &mut self,
        session: &CanvasSession,
        now: DateTime<Utc>,
    ) -> Result<Note, NoteServiceError> {
        let note = session.to_note(now);
        self.repo.save_note(&note)?;
        Ok(note)
    }

    /// Upserts `note` stamped with the current time.
    pub fn save_note(&mut self, note: Note) -> Result<Note, NoteServiceError> {
        self.save_note_at(note, Utc::now())
    }

    /// Upserts `note` with `updated_at = now` and a normalized title.
    ///
    /// `now` earlier than `created_at` is clamped to `created_at`.
    pub fn save_note_at(
        &mut self,
        mut note: Note,
        now: DateTime<Utc>,
    ) -> Result<Note, NoteServiceError> {
        note.title = normalize_title(&note.title);
        note.updated_at = now.max(note.created_at);
        self.repo.save_note(&note)?;
        Ok(note)
    }

    pub fn get_note(&self, id: &str) -> Option<Note> {
        self.repo.get_note(id)
    }

    /// Lists all notes, most recently updated first.
    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list_notes()
    }

    pub fn delete_note(&mut self, id: &str) -> Result<(), NoteServiceError> {
        self.repo.delete_note(id)?;
        Ok(())
    }

    /// Gallery cards in list order, labelled relative to `now`.
    pub fn gallery_cards(&self, now: DateTime<Utc>) -> Vec<NoteCard> {
        self.repo
            .list_notes()
            .into_iter()
            .map(|note| NoteCard {
                updated_label: format_updated_label(note.updated_at, now),
                stroke_count: note.strokes.len(),
                id: note.id,
                title: note.title,
            })
            .collect()
    }
}

/// Formats `updated_at` relative to `now`.
///
/// Whole elapsed days: 0 is `Today`, 1 is `Yesterday`, 2..=6 is `N days ago`,
/// anything older is a short month/day date. Future timestamps read `Today`.
pub fn format_updated_label(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - updated_at).num_milliseconds();
    let days = elapsed_ms.div_euclid(MILLIS_PER_DAY);
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => updated_at.format("%b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_updated_label;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn labels_follow_elapsed_whole_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 20, 18, 0, 0).unwrap();
        assert_eq!(format_updated_label(now - Duration::hours(23), now), "Today");
        assert_eq!(format_updated_label(now - Duration::hours(25), now), "Yesterday");
        assert_eq!(format_updated_label(now - Duration::days(6), now), "6 days ago");
        assert_eq!(
            format_updated_label(Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap(), now),
            "Jan 5"
        );
    }

    #[test]
    fn future_timestamp_reads_today() {
        let now = Utc.with_ymd_and_hms(2024, 6, 20, 18, 0, 0).unwrap();
        assert_eq!(format_updated_label(now + Duration::hours(30), now), "Today");
    }
}
