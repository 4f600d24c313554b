//! In-memory editing state for one note on the canvas.
//!
//! # Responsibility
//! - Route gesture callbacks into the stroke accumulator.
//! - Track the selected pen tool and eraser toggle.
//! - Produce the note record to persist when the user saves.
//!
//! # Invariants
//! - Committed strokes are appended in gesture order.
//! - The note id and `created_at` never change during a session.
//! - Picking a color or size always switches the eraser off.

use crate::canvas::accumulator::{PenTool, StrokeAccumulator};
use crate::model::note::{normalize_title, Note};
use crate::model::pen::{PenColor, PenSize, Theme};
use crate::model::stroke::{Point, Stroke};
use crate::render::path::{points_to_path, StrokePath};
use chrono::{DateTime, Utc};
use log::debug;

/// Editing session over a note draft.
#[derive(Debug, Clone)]
pub struct CanvasSession {
    note: Note,
    title: String,
    strokes: Vec<Stroke>,
    accumulator: StrokeAccumulator,
    theme: Theme,
    pen_color: PenColor,
    pen_size: PenSize,
    eraser: bool,
    is_new: bool,
    has_changes: bool,
}

impl CanvasSession {
    /// Opens `note` for editing. `is_new` marks drafts not yet persisted.
    pub fn open(note: Note, theme: Theme, is_new: bool) -> Self {
        Self {
            title: note.title.clone(),
            strokes: note.strokes.clone(),
            note,
            accumulator: StrokeAccumulator::new(),
            theme,
            pen_color: PenColor::default(),
            pen_size: PenSize::default(),
            eraser: false,
            is_new,
            has_changes: false,
        }
    }

    /// Gesture start; `point` is the touch-down location.
    pub fn stroke_start(&mut self, point: Point) {
        self.has_changes = true;
        self.accumulator.begin();
        self.accumulator.update(point);
    }

    pub fn stroke_update(&mut self, point: Point) {
        self.accumulator.update(point);
    }

    /// Gesture end or cancellation. Returns whether a stroke was committed.
    pub fn stroke_end(&mut self) -> bool {
        match self.accumulator.end(self.tool(), self.theme) {
            Some(stroke) => {
                debug!(
                    "event=stroke_commit module=canvas status=ok points={} eraser={}",
                    stroke.points.len(),
                    self.eraser
                );
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    pub fn select_color(&mut self, color: PenColor) {
        self.pen_color = color;
        self.eraser = false;
    }

    pub fn select_size(&mut self, size: PenSize) {
        self.pen_size = size;
        self.eraser = false;
    }

    pub fn toggle_eraser(&mut self) {
        self.eraser = !self.eraser;
    }

    /// Applies to strokes committed afterwards; existing strokes keep their
    /// resolved colors.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.has_changes = true;
    }

    /// Removes every stroke. Returns `false` when there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.strokes.is_empty() {
            return false;
        }
        self.strokes.clear();
        self.has_changes = true;
        true
    }

    /// Removes and returns the most recently committed stroke.
    pub fn undo_last_stroke(&mut self) -> Option<Stroke> {
        let removed = self.strokes.pop();
        if removed.is_some() {
            self.has_changes = true;
        }
        removed
    }

    /// Tool that the next committed stroke will use.
    pub fn tool(&self) -> PenTool {
        if self.eraser {
            PenTool::Eraser
        } else {
            PenTool::Pen {
                color: self.pen_color,
                size: self.pen_size,
            }
        }
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn note_id(&self) -> &str {
        &self.note.id
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Path data for the gesture in progress; empty while idle.
    pub fn in_progress_path(&self) -> String {
        points_to_path(self.accumulator.pending_points())
    }

    /// Full-size paths for committed strokes.
    pub fn stroke_paths(&self) -> Vec<StrokePath> {
        self.strokes
            .iter()
            .map(|stroke| StrokePath::from_stroke(stroke, 1.0))
            .collect()
    }

    /// Builds the note to persist, stamped with `now`.
    ///
    /// A gesture still in progress is not included.
    pub fn to_note(&self, now: DateTime<Utc>) -> Note {
        Note {
            id: self.note.id.clone(),
            title: normalize_title(&self.title),
            strokes: self.strokes.clone(),
            created_at: self.note.created_at,
            updated_at: now.max(self.note.created_at),
            thumbnail: self.note.thumbnail.clone(),
        }
    }

    /// Consuming variant of [`Self::to_note`].
    pub fn into_note(self, now: DateTime<Utc>) -> Note {
        let updated_at = now.max(self.note.created_at);
        Note {
            title: normalize_title(&self.title),
            strokes: self.strokes,
            updated_at,
            ..self.note
        }
    }
}
