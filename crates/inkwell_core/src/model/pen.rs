//! Pen palette, widths and canvas themes.
//!
//! Colors are plain hex tokens. A stroke copies the token at creation, so
//! switching theme later never recolors saved strokes.

use serde::{Deserialize, Serialize};

/// Eraser width: twice the bold pen.
pub const ERASER_SIZE: f64 = PenSize::Bold.width() * 2.0;

/// Canvas color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Canvas background; also the color eraser strokes are drawn with.
    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "#F4F1E8",
            Self::Dark => "#1F2123",
        }
    }

    /// Color of the dotted paper grid.
    pub fn dot_grid(self) -> &'static str {
        match self {
            Self::Light => "#D9D4C3",
            Self::Dark => "#3A3A3A",
        }
    }
}

/// Selectable pen inks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenColor {
    #[default]
    Black,
    Blue,
    Red,
    Green,
    Brown,
}

impl PenColor {
    pub const ALL: [PenColor; 5] = [
        Self::Black,
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Brown,
    ];

    /// Resolves this ink to a concrete color token for `theme`.
    pub fn resolve(self, theme: Theme) -> &'static str {
        match (theme, self) {
            (Theme::Light, Self::Black) => "#2C2C2C",
            (Theme::Light, Self::Blue) => "#3B5998",
            (Theme::Light, Self::Red) => "#C93838",
            (Theme::Light, Self::Green) => "#2D5C3F",
            (Theme::Light, Self::Brown) => "#8B6F47",
            (Theme::Dark, Self::Black) => "#ECEDEE",
            (Theme::Dark, Self::Blue) => "#6B8DD6",
            (Theme::Dark, Self::Red) => "#E85858",
            (Theme::Dark, Self::Green) => "#4D8C6F",
            (Theme::Dark, Self::Brown) => "#B8956F",
        }
    }
}

/// Selectable pen widths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenSize {
    Fine,
    #[default]
    Medium,
    Bold,
}

impl PenSize {
    pub const fn width(self) -> f64 {
        match self {
            Self::Fine => 2.0,
            Self::Medium => 4.0,
            Self::Bold => 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PenColor, PenSize, Theme, ERASER_SIZE};

    #[test]
    fn eraser_is_twice_bold() {
        assert_eq!(ERASER_SIZE, 16.0);
        assert_eq!(PenSize::Bold.width() * 2.0, ERASER_SIZE);
    }

    #[test]
    fn pen_colors_differ_between_themes() {
        for color in PenColor::ALL {
            assert_ne!(color.resolve(Theme::Light), color.resolve(Theme::Dark));
        }
    }

    #[test]
    fn defaults_match_initial_toolbar_state() {
        assert_eq!(PenColor::default(), PenColor::Black);
        assert_eq!(PenSize::default(), PenSize::Medium);
        assert_eq!(Theme::default().background(), "#F4F1E8");
    }
}
