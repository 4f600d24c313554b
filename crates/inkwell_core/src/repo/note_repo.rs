//! Note repository contracts and key-value implementation.
//!
//! # Responsibility
//! - Persist the note collection as one JSON array under [`NOTES_KEY`].
//! - Provide list/get/upsert/delete over that collection.
//!
//! # Invariants
//! - At most one stored record per note id; saving an existing id replaces
//!   it in place.
//! - `list_notes` is sorted by `updated_at DESC, id ASC`.
//! - Writes validate the note before touching storage.
//! - Write paths read strictly: an unreadable collection aborts the write
//!   instead of being overwritten.
//!
//! # Compatibility
//! - The mobile app's storage layer read the collection leniently on writes
//!   too, so a corrupt `inkwell_notes` value was replaced by a one-note
//!   array on the next save. Here that save returns
//!   [`RepoError::Serialization`](crate::repo::RepoError::Serialization) and
//!   the stored value is left untouched.

use crate::model::note::Note;
use crate::repo::{RepoResult, NOTES_KEY};
use crate::store::KeyValueStore;
use log::{error, info};

/// Repository interface for note persistence.
pub trait NoteRepository {
    /// All notes, most recently updated first. Empty on read failure.
    fn list_notes(&self) -> Vec<Note>;
    /// One note by id. `None` when missing or on read failure.
    fn get_note(&self, id: &str) -> Option<Note>;
    /// Replaces the note with the same id, or appends it.
    fn save_note(&mut self, note: &Note) -> RepoResult<()>;
    /// Removes the note with `id`. Unknown ids are not an error.
    fn delete_note(&mut self, id: &str) -> RepoResult<()>;
}

/// Note repository storing the whole collection under one store key.
pub struct KvNoteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvNoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn read_collection(&self) -> RepoResult<Vec<Note>> {
        match self.store.get_item(NOTES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn read_collection_or_empty(&self, op: &'static str) -> Vec<Note> {
        match self.read_collection() {
            Ok(notes) => notes,
            Err(err) => {
                error!(
                    "event={op} module=repo status=error error_code=notes_read_failed error={err}"
                );
                Vec::new()
            }
        }
    }

    fn write_collection(&mut self, op: &'static str, notes: &[Note]) -> RepoResult<()> {
        let encoded = serde_json::to_string(notes)?;
        if let Err(err) = self.store.set_item(NOTES_KEY, &encoded) {
            error!(
                "event={op} module=repo status=error error_code=notes_write_failed error={err}"
            );
            return Err(err.into());
        }
        Ok(())
    }
}

impl<S: KeyValueStore> NoteRepository for KvNoteRepository<S> {
    fn list_notes(&self) -> Vec<Note> {
        let mut notes = self.read_collection_or_empty("notes_list");
        sort_by_recent(&mut notes);
        notes
    }

    fn get_note(&self, id: &str) -> Option<Note> {
        self.read_collection_or_empty("note_get")
            .into_iter()
            .find(|note| note.id == id)
    }

    fn save_note(&mut self, note: &Note) -> RepoResult<()> {
        note.validate()?;

        let mut notes = self.read_collection().map_err(|err| {
            error!(
                "event=note_save module=repo status=error error_code=notes_read_failed error={err}"
            );
            err
        })?;
        let replaced = match notes.iter_mut().find(|existing| existing.id == note.id) {
            Some(existing) => {
                *existing = note.clone();
                true
            }
            None => {
                notes.push(note.clone());
                false
            }
        };
        self.write_collection("note_save", &notes)?;

        info!(
            "event=note_save module=repo status=ok replaced={} strokes={} total={}",
            replaced,
            note.strokes.len(),
            notes.len()
        );
        Ok(())
    }

    fn delete_note(&mut self, id: &str) -> RepoResult<()> {
        let notes = self.read_collection().map_err(|err| {
            error!(
                "event=note_delete module=repo status=error error_code=notes_read_failed error={err}"
            );
            err
        })?;
        let before = notes.len();
        let remaining: Vec<Note> = notes.into_iter().filter(|note| note.id != id).collect();
        self.write_collection("note_delete", &remaining)?;

        info!(
            "event=note_delete module=repo status=ok removed={} total={}",
            before - remaining.len(),
            remaining.len()
        );
        Ok(())
    }
}

/// Sorts notes by `updated_at` descending, ties by id ascending.
pub fn sort_by_recent(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::{sort_by_recent, KvNoteRepository, NoteRepository};
    use crate::model::note::Note;
    use crate::repo::{RepoError, NOTES_KEY};
    use crate::store::{KeyValueStore, MemoryKeyValueStore};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn sort_breaks_ties_by_id() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut notes = vec![
            Note::with_id("b", now),
            Note::with_id("a", now),
            Note::with_id("c", now + Duration::seconds(1)),
        ];
        sort_by_recent(&mut notes);
        let ids: Vec<&str> = notes.iter().map(|note| note.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn malformed_collection_reads_empty_but_blocks_writes() {
        let mut store = MemoryKeyValueStore::new();
        store.set_item(NOTES_KEY, "{not json").unwrap();
        let mut repo = KvNoteRepository::new(store);

        assert!(repo.list_notes().is_empty());
        assert!(repo.get_note("any").is_none());

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let err = repo.save_note(&Note::with_id("n", now)).unwrap_err();
        assert!(matches!(err, RepoError::Serialization(_)));
        assert!(matches!(repo.delete_note("n"), Err(RepoError::Serialization(_))));
        let store = repo.into_inner();
        assert_eq!(store.get_item(NOTES_KEY).unwrap().as_deref(), Some("{not json"));
    }
}
