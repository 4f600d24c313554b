//! Point and stroke primitives.
//!
//! # Responsibility
//! - Define the sampled touch point and the committed stroke record.
//! - Validate stroke invariants before persistence.
//!
//! # Invariants
//! - Committed strokes carry at least one point.
//! - Point order is the sampling order and is never rearranged.
//! - Stroke width is finite and strictly positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Single sampled touch location in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point with both coordinates multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One continuous pen-down to pen-up gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Sampled points, first to last.
    pub points: Vec<Point>,
    /// Opaque color token (hex) resolved from the theme at creation time.
    pub color: String,
    /// Stroke width in canvas units.
    pub size: f64,
}

/// Validation failures for stroke data.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeValidationError {
    /// Committed stroke has no points.
    EmptyPoints,
    /// Point at `index` has a NaN or infinite coordinate.
    NonFinitePoint { index: usize },
    /// Width is zero, negative or not finite.
    InvalidSize(f64),
}

impl Display for StrokeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPoints => write!(f, "stroke must contain at least one point"),
            Self::NonFinitePoint { index } => {
                write!(f, "stroke point {index} has a non-finite coordinate")
            }
            Self::InvalidSize(size) => write!(f, "stroke size must be positive, got {size}"),
        }
    }
}

impl Error for StrokeValidationError {}

impl Stroke {
    pub fn new(points: Vec<Point>, color: impl Into<String>, size: f64) -> Self {
        Self {
            points,
            color: color.into(),
            size,
        }
    }

    /// Checks the committed-stroke invariants.
    pub fn validate(&self) -> Result<(), StrokeValidationError> {
        if self.points.is_empty() {
            return Err(StrokeValidationError::EmptyPoints);
        }
        if let Some(index) = self.points.iter().position(|point| !point.is_finite()) {
            return Err(StrokeValidationError::NonFinitePoint { index });
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(StrokeValidationError::InvalidSize(self.size));
        }
        Ok(())
    }

    /// Returns a copy with every coordinate and the width scaled uniformly.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self.points.iter().map(|point| point.scaled(factor)).collect(),
            color: self.color.clone(),
            size: self.size * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Stroke, StrokeValidationError};

    #[test]
    fn validate_rejects_empty_points() {
        let stroke = Stroke::new(Vec::new(), "#2C2C2C", 4.0);
        assert_eq!(stroke.validate(), Err(StrokeValidationError::EmptyPoints));
    }

    #[test]
    fn validate_reports_first_non_finite_point() {
        let stroke = Stroke::new(
            vec![Point::new(1.0, 2.0), Point::new(f64::NAN, 3.0)],
            "#2C2C2C",
            4.0,
        );
        assert_eq!(
            stroke.validate(),
            Err(StrokeValidationError::NonFinitePoint { index: 1 })
        );
    }

    #[test]
    fn validate_rejects_non_positive_size() {
        let stroke = Stroke::new(vec![Point::new(1.0, 2.0)], "#2C2C2C", 0.0);
        assert!(matches!(
            stroke.validate(),
            Err(StrokeValidationError::InvalidSize(_))
        ));
    }

    #[test]
    fn scaled_multiplies_points_and_size() {
        let stroke = Stroke::new(vec![Point::new(10.0, 20.0)], "#C93838", 8.0);
        let half = stroke.scaled(0.5);
        assert_eq!(half.points, vec![Point::new(5.0, 10.0)]);
        assert_eq!(half.size, 4.0);
        assert_eq!(half.color, "#C93838");
    }

    #[test]
    fn point_serializes_as_plain_xy_object() {
        let json = serde_json::to_value(Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 1.5, "y": -2.0 }));
    }
}
