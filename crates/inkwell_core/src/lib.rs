//! Core domain logic for Inkwell handwritten notes.
//! This crate is the single source of truth for the stroke model, its
//! rendering contract and its persisted layout.

pub mod canvas;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod store;

pub use canvas::accumulator::{PenTool, StrokeAccumulator};
pub use canvas::session::CanvasSession;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{normalize_title, Note, NoteId, NoteValidationError, UNTITLED};
pub use model::pen::{PenColor, PenSize, Theme, ERASER_SIZE};
pub use model::settings::{AppSettings, DEFAULT_DISPLAY_NAME};
pub use model::stroke::{Point, Stroke, StrokeValidationError};
pub use render::path::{parse_path, points_to_path, scale_points, PathParseError, StrokePath};
pub use render::svg::{render_note_svg, SvgOptions};
pub use render::thumbnail::ThumbnailLayout;
pub use repo::note_repo::{KvNoteRepository, NoteRepository};
pub use repo::settings_repo::{KvSettingsRepository, SettingsRepository};
pub use repo::{RepoError, RepoResult, NOTES_KEY, SETTINGS_KEY};
pub use service::note_service::{format_updated_label, NoteCard, NoteService, NoteServiceError};
pub use service::settings_service::SettingsService;
pub use store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
