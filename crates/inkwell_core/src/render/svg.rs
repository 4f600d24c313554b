//! SVG export of a note.
//!
//! Output mirrors the canvas: paper background, optional dot grid, then one
//! round-capped path per stroke in drawing order.

use crate::model::note::Note;
use crate::model::pen::Theme;
use crate::render::path::StrokePath;
use svg::node::element::{Circle, Group, Path, Rectangle};
use svg::Document;

/// Distance between dot-grid dots, in output units.
pub const DOT_SPACING: f64 = 20.0;
/// Dot-grid dot radius.
pub const DOT_RADIUS: f64 = 1.0;
/// Largest dot grid emitted; bigger outputs render without the grid.
pub const MAX_GRID_DOTS: usize = 100_000;

/// Output size and appearance for [`render_note_svg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    /// Multiplier applied to stroke geometry; 1.0 renders at canvas size.
    pub scale: f64,
    pub theme: Theme,
    pub dot_grid: bool,
}

impl SvgOptions {
    /// Validated options with the dot grid on.
    ///
    /// Returns `None` unless `width`, `height` and `scale` are positive and
    /// finite.
    pub fn new(width: f64, height: f64, scale: f64, theme: Theme) -> Option<Self> {
        let options = Self {
            width,
            height,
            scale,
            theme,
            dot_grid: true,
        };
        options.is_valid().then_some(options)
    }

    pub fn full_size(width: f64, height: f64, theme: Theme) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            theme,
            dot_grid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_positive(self.width) && is_positive(self.height) && is_positive(self.scale)
    }
}

/// Renders `note` to a standalone SVG document string.
pub fn render_note_svg(note: &Note, options: &SvgOptions) -> String {
    let mut document = Document::new()
        .set("width", options.width)
        .set("height", options.height)
        .set("viewBox", (0.0, 0.0, options.width, options.height))
        .add(
            Rectangle::new()
                .set("width", options.width)
                .set("height", options.height)
                .set("fill", options.theme.background()),
        );

    if options.dot_grid {
        if let Some(grid) = dot_grid(options) {
            document = document.add(grid);
        }
    }

    let mut strokes = Group::new();
    for stroke in &note.strokes {
        let path = StrokePath::from_stroke(stroke, options.scale);
        if path.d.is_empty() {
            continue;
        }
        strokes = strokes.add(
            Path::new()
                .set("d", path.d.as_str())
                .set("stroke", path.color.as_str())
                .set("stroke-width", path.width)
                .set("stroke-linecap", path.line_cap())
                .set("stroke-linejoin", path.line_join())
                .set("fill", "none"),
        );
    }

    document.add(strokes).to_string()
}

/// `None` when the output size is invalid or the grid would exceed
/// [`MAX_GRID_DOTS`].
fn dot_grid(options: &SvgOptions) -> Option<Group> {
    if !is_positive(options.width) || !is_positive(options.height) {
        return None;
    }
    let cols = (options.width / DOT_SPACING).ceil() + 1.0;
    let rows = (options.height / DOT_SPACING).ceil() + 1.0;
    if cols * rows > MAX_GRID_DOTS as f64 {
        return None;
    }
    let (cols, rows) = (cols as usize, rows as usize);

    let mut group = Group::new().set("fill", options.theme.dot_grid());
    for row in 0..rows {
        for col in 0..cols {
            group = group.add(
                Circle::new()
                    .set("cx", col as f64 * DOT_SPACING)
                    .set("cy", row as f64 * DOT_SPACING)
                    .set("r", DOT_RADIUS),
            );
        }
    }
    Some(group)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::{render_note_svg, SvgOptions, MAX_GRID_DOTS};
    use crate::model::note::Note;
    use crate::model::pen::Theme;
    use crate::model::stroke::{Point, Stroke};
    use chrono::{TimeZone, Utc};

    fn sample_note() -> Note {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut note = Note::with_id("svg-note", now);
        note.strokes.push(Stroke::new(
            vec![Point::new(10.0, 10.0), Point::new(30.0, 20.0)],
            "#C93838",
            4.0,
        ));
        note.strokes.push(Stroke::new(vec![Point::new(5.0, 5.0)], "#2C2C2C", 2.0));
        note
    }

    #[test]
    fn renders_one_path_per_stroke_in_order() {
        let mut options = SvgOptions::full_size(100.0, 80.0, Theme::Light);
        options.dot_grid = false;
        let svg = render_note_svg(&sample_note(), &options);

        let first = svg.find("M 10 10 L 30 20").expect("first stroke path");
        let second = svg.find("M 5 5 L 5 5").expect("tap renders as a dot");
        assert!(first < second);
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.contains("#F4F1E8"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn scaled_render_shrinks_geometry() {
        let options = SvgOptions {
            width: 50.0,
            height: 40.0,
            scale: 0.5,
            theme: Theme::Dark,
            dot_grid: true,
        };
        let svg = render_note_svg(&sample_note(), &options);
        assert!(svg.contains("M 5 5 L 15 10"));
        assert!(svg.contains("#1F2123"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn new_rejects_non_finite_or_non_positive_sizes() {
        assert!(SvgOptions::new(100.0, 80.0, 0.5, Theme::Light).is_some());
        assert!(SvgOptions::new(f64::INFINITY, 80.0, 1.0, Theme::Light).is_none());
        assert!(SvgOptions::new(100.0, 0.0, 1.0, Theme::Light).is_none());
        assert!(SvgOptions::new(100.0, 80.0, f64::NAN, Theme::Light).is_none());
        assert!(!SvgOptions::full_size(-1.0, 80.0, Theme::Dark).is_valid());
    }

    #[test]
    fn unbounded_sizes_render_without_dot_grid() {
        let infinite = SvgOptions::full_size(f64::INFINITY, 10.0, Theme::Light);
        let svg = render_note_svg(&sample_note(), &infinite);
        assert!(!svg.contains("<circle"));
        assert!(svg.contains("M 10 10 L 30 20"));

        let huge = SvgOptions::full_size(1e9, 1e9, Theme::Light);
        let svg = render_note_svg(&sample_note(), &huge);
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn dot_grid_covers_output_edges() {
        let svg = render_note_svg(&sample_note(), &SvgOptions::full_size(400.0, 300.0, Theme::Light));
        assert_eq!(svg.matches("<circle").count(), 21 * 16);
        assert!(21 * 16 <= MAX_GRID_DOTS);
    }
}
