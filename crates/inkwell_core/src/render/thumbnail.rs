//! Gallery thumbnail geometry.
//!
//! Thumbnails redraw the saved strokes scaled by `thumbnail width / canvas
//! width`. Points and stroke width share the one factor, so the drawing keeps
//! its aspect and relative shape.

use crate::model::note::Note;
use crate::model::stroke::Stroke;
use crate::render::path::StrokePath;

/// Horizontal spacing around and between the two gallery columns.
pub const GALLERY_SPACING: f64 = 16.0;
/// Thumbnail height relative to its width.
pub const THUMBNAIL_ASPECT: f64 = 1.2;

/// Size and scale factor of one thumbnail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailLayout {
    pub width: f64,
    pub height: f64,
    /// Multiplier applied to canvas coordinates and stroke widths.
    pub scale: f64,
}

impl ThumbnailLayout {
    /// Layout for a thumbnail `thumbnail_width` wide previewing a canvas
    /// `canvas_width` wide.
    ///
    /// Returns `None` when either width is not positive and finite.
    pub fn new(thumbnail_width: f64, canvas_width: f64) -> Option<Self> {
        if !is_positive(thumbnail_width) || !is_positive(canvas_width) {
            return None;
        }
        Some(Self {
            width: thumbnail_width,
            height: thumbnail_width * THUMBNAIL_ASPECT,
            scale: thumbnail_width / canvas_width,
        })
    }

    /// Two-column gallery card layout for a screen `screen_width` wide, where
    /// the canvas spans the full screen width.
    pub fn for_screen(screen_width: f64) -> Option<Self> {
        let card_width = (screen_width - GALLERY_SPACING * 3.0) / 2.0;
        Self::new(card_width, screen_width)
    }

    pub fn scale_stroke(&self, stroke: &Stroke) -> Stroke {
        stroke.scaled(self.scale)
    }

    /// Drawable paths for every stroke of `note`, in drawing order.
    pub fn stroke_paths(&self, note: &Note) -> Vec<StrokePath> {
        note.strokes
            .iter()
            .map(|stroke| StrokePath::from_stroke(stroke, self.scale))
            .collect()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::ThumbnailLayout;

    #[test]
    fn screen_layout_matches_two_column_gallery() {
        let layout = ThumbnailLayout::for_screen(400.0).unwrap();
        assert_eq!(layout.width, 176.0);
        assert!((layout.height - 211.2).abs() < 1e-9);
        assert!((layout.scale - 0.44).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_widths() {
        assert!(ThumbnailLayout::new(100.0, 0.0).is_none());
        assert!(ThumbnailLayout::new(-1.0, 300.0).is_none());
        assert!(ThumbnailLayout::for_screen(40.0).is_none());
    }
}
