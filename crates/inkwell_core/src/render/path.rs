//! Stroke point lists to vector path data and back.
//!
//! # Responsibility
//! - Build the `d` attribute for a stroke polyline.
//! - Parse that `d` attribute back into points.
//! - Apply uniform scaling for reduced-size previews.
//!
//! # Invariants
//! - `points_to_path` is pure: equal inputs give byte-equal output.
//! - A single point yields a zero-length segment, never an empty path.
//! - `parse_path(points_to_path(p)) == p` for every `p` with two or more
//!   finite points.

use crate::model::stroke::{Point, Stroke};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

pub const LINE_CAP: &str = "round";
pub const LINE_JOIN: &str = "round";

static PATH_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]|[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?|[^\s,]+")
        .expect("valid path token regex")
});
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?$").expect("valid number regex")
});

/// Path parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Path data does not begin with an absolute move-to.
    MissingMoveTo,
    /// A second move-to; stroke paths are a single subpath.
    UnexpectedMoveTo,
    /// Command other than `M`/`L`.
    UnsupportedCommand(String),
    /// Command ended before both coordinates were read.
    MissingCoordinate(char),
    /// Token is neither a command nor a finite number.
    InvalidNumber(String),
}

impl Display for PathParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMoveTo => write!(f, "path must start with `M`"),
            Self::UnexpectedMoveTo => write!(f, "path contains more than one `M`"),
            Self::UnsupportedCommand(command) => {
                write!(f, "unsupported path command `{command}`")
            }
            Self::MissingCoordinate(command) => {
                write!(f, "`{command}` command is missing a coordinate")
            }
            Self::InvalidNumber(token) => write!(f, "invalid path number `{token}`"),
        }
    }
}

impl Error for PathParseError {}

/// Builds path data for a polyline through `points`, in order.
///
/// Empty input yields an empty string. One point yields `M x y L x y` so a
/// tap still renders as a round-capped dot.
pub fn points_to_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = format!("M {} {}", first.x, first.y);
    if rest.is_empty() {
        let _ = write!(path, " L {} {}", first.x, first.y);
        return path;
    }
    for point in rest {
        let _ = write!(path, " L {} {}", point.x, point.y);
    }
    path
}

/// Parses `M`/`L` path data back into the vertex list.
///
/// Coordinate pairs following a command without a new letter repeat as
/// line-to. Every vertex is returned, so `M 1 2 L 1 2` yields two points.
pub fn parse_path(data: &str) -> Result<Vec<Point>, PathParseError> {
    let tokens: Vec<&str> = PATH_TOKEN_RE
        .find_iter(data)
        .map(|token| token.as_str())
        .collect();
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let mut points = Vec::new();
    let mut cursor = 0;
    let mut command: Option<char> = None;
    while cursor < tokens.len() {
        let token = tokens[cursor];
        if let Some(letter) = single_letter(token) {
            match letter {
                'M' if command.is_none() => command = Some('M'),
                'M' => return Err(PathParseError::UnexpectedMoveTo),
                'L' if command.is_some() => command = Some('L'),
                'L' => return Err(PathParseError::MissingMoveTo),
                _ if command.is_none() => return Err(PathParseError::MissingMoveTo),
                _ => return Err(PathParseError::UnsupportedCommand(token.to_string())),
            }
            cursor += 1;
            let active = command.unwrap_or('M');
            let (point, next) = read_pair(&tokens, cursor, active)?;
            points.push(point);
            cursor = next;
            continue;
        }

        let Some(active) = command else {
            return Err(PathParseError::MissingMoveTo);
        };
        let (point, next) = read_pair(&tokens, cursor, active)?;
        points.push(point);
        cursor = next;
    }

    Ok(points)
}

/// Returns `points` with every coordinate multiplied by `factor`.
pub fn scale_points(points: &[Point], factor: f64) -> Vec<Point> {
    points.iter().map(|point| point.scaled(factor)).collect()
}

/// Render-ready description of one stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    pub d: String,
    pub color: String,
    pub width: f64,
}

impl StrokePath {
    /// Builds the drawable path for `stroke` at `scale` (1.0 for full size).
    pub fn from_stroke(stroke: &Stroke, scale: f64) -> Self {
        Self {
            d: points_to_path(&scale_points(&stroke.points, scale)),
            color: stroke.color.clone(),
            width: stroke.size * scale,
        }
    }

    pub fn line_cap(&self) -> &'static str {
        LINE_CAP
    }

    pub fn line_join(&self) -> &'static str {
        LINE_JOIN
    }
}

fn single_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

fn read_pair(tokens: &[&str], cursor: usize, command: char) -> Result<(Point, usize), PathParseError> {
    let x = read_number(tokens.get(cursor).copied(), command)?;
    let y = read_number(tokens.get(cursor + 1).copied(), command)?;
    Ok((Point::new(x, y), cursor + 2))
}

fn read_number(token: Option<&str>, command: char) -> Result<f64, PathParseError> {
    let token = match token {
        Some(token) if single_letter(token).is_none() => token,
        _ => return Err(PathParseError::MissingCoordinate(command)),
    };
    if !NUMBER_RE.is_match(token) {
        return Err(PathParseError::InvalidNumber(token.to_string()));
    }
    let value: f64 = token
        .parse()
        .map_err(|_| PathParseError::InvalidNumber(token.to_string()))?;
    if !value.is_finite() {
        return Err(PathParseError::InvalidNumber(token.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_path, points_to_path, PathParseError, StrokePath};
    use crate::model::stroke::{Point, Stroke};

    #[test]
    fn empty_points_give_empty_path() {
        assert_eq!(points_to_path(&[]), "");
        assert_eq!(parse_path("").unwrap(), Vec::new());
    }

    #[test]
    fn single_point_renders_degenerate_segment() {
        let path = points_to_path(&[Point::new(12.5, 40.0)]);
        assert_eq!(path, "M 12.5 40 L 12.5 40");
    }

    #[test]
    fn polyline_keeps_point_order() {
        let path = points_to_path(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(-3.25, 7.0),
        ]);
        assert_eq!(path, "M 0 0 L 10 5 L -3.25 7");
    }

    #[test]
    fn coincident_points_are_not_collapsed() {
        let points = vec![Point::new(3.0, 3.0), Point::new(3.0, 3.0)];
        assert_eq!(parse_path(&points_to_path(&points)).unwrap(), points);
    }

    #[test]
    fn parse_accepts_commas_and_implicit_line_to() {
        let points = parse_path("M1,2 3,4L5 6").unwrap();
        assert_eq!(
            points,
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)]
        );
    }

    #[test]
    fn parse_accepts_exponent_notation() {
        let points = parse_path("M 1e-7 2.5E3").unwrap();
        assert_eq!(points, vec![Point::new(1e-7, 2500.0)]);
    }

    #[test]
    fn parse_rejects_malformed_paths() {
        assert_eq!(parse_path("L 1 2"), Err(PathParseError::MissingMoveTo));
        assert_eq!(parse_path("M 1"), Err(PathParseError::MissingCoordinate('M')));
        assert_eq!(
            parse_path("M 1 2 C 3 4"),
            Err(PathParseError::UnsupportedCommand("C".to_string()))
        );
        assert_eq!(parse_path("M 1 2 M 3 4"), Err(PathParseError::UnexpectedMoveTo));
        assert_eq!(
            parse_path("M 1 2 L x 4"),
            Err(PathParseError::MissingCoordinate('L'))
        );
        assert_eq!(
            parse_path("M 1 2 L 3 #"),
            Err(PathParseError::InvalidNumber("#".to_string()))
        );
    }

    #[test]
    fn stroke_path_scales_width_and_points() {
        let stroke = Stroke::new(
            vec![Point::new(100.0, 50.0), Point::new(200.0, 80.0)],
            "#3B5998",
            4.0,
        );
        let path = StrokePath::from_stroke(&stroke, 0.5);
        assert_eq!(path.d, "M 50 25 L 100 40");
        assert_eq!(path.width, 2.0);
        assert_eq!(path.color, "#3B5998");
        assert_eq!(path.line_cap(), "round");
        assert_eq!(path.line_join(), "round");
    }
}
