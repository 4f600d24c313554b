//! Drawing domain model for notes, strokes and settings.
//!
//! # Responsibility
//! - Define canonical data structures persisted by the repository layer.
//! - Keep JSON field naming stable for the stored collections.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned once.
//! - A note exclusively owns its strokes; stroke order is temporal.
//! - Stroke colors are resolved at creation time and never re-resolved.

pub mod note;
pub mod pen;
pub mod settings;
pub mod stroke;
