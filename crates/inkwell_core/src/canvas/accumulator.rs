//! Pen-down to pen-up stroke accumulation.
//!
//! # Invariants
//! - Two states only: idle, or accumulating an ordered point list.
//! - Every update appends exactly one point; duplicates are kept.
//! - A stroke is committed only on the accumulating -> idle transition and
//!   only when at least one point was sampled.

use crate::model::pen::{PenColor, PenSize, Theme, ERASER_SIZE};
use crate::model::stroke::{Point, Stroke};

/// Active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenTool {
    Pen { color: PenColor, size: PenSize },
    /// Draws in the canvas background color with a fixed wide width.
    Eraser,
}

impl Default for PenTool {
    fn default() -> Self {
        Self::Pen {
            color: PenColor::default(),
            size: PenSize::default(),
        }
    }
}

impl PenTool {
    /// Resolves the color token a stroke drawn now would carry.
    pub fn color(self, theme: Theme) -> &'static str {
        match self {
            Self::Pen { color, .. } => color.resolve(theme),
            Self::Eraser => theme.background(),
        }
    }

    pub fn width(self) -> f64 {
        match self {
            Self::Pen { size, .. } => size.width(),
            Self::Eraser => ERASER_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum State {
    #[default]
    Idle,
    Accumulating(Vec<Point>),
}

/// Two-state stroke builder driven by gesture callbacks.
#[derive(Debug, Clone, Default)]
pub struct StrokeAccumulator {
    state: State,
}

impl StrokeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new empty point list, dropping any unfinished one.
    pub fn begin(&mut self) {
        self.state = State::Accumulating(Vec::new());
    }

    /// Appends one sampled point. Ignored while idle.
    pub fn update(&mut self, point: Point) {
        if let State::Accumulating(points) = &mut self.state {
            points.push(point);
        }
    }

    /// Finishes the gesture and returns the committed stroke, if any.
    ///
    /// The color is resolved from `theme` here, once.
    pub fn end(&mut self, tool: PenTool, theme: Theme) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            State::Accumulating(points) if !points.is_empty() => {
                Some(Stroke::new(points, tool.color(theme), tool.width()))
            }
            _ => None,
        }
    }

    /// Abnormal gesture termination; commits like [`Self::end`].
    pub fn cancel(&mut self, tool: PenTool, theme: Theme) -> Option<Stroke> {
        self.end(tool, theme)
    }

    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, State::Accumulating(_))
    }

    /// Points sampled so far in the current gesture.
    pub fn pending_points(&self) -> &[Point] {
        match &self.state {
            State::Accumulating(points) => points,
            State::Idle => &[],
        }
    }
}
