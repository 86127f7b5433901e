//! Background/foreground resolution with contrast correction

use crate::color::{Color, parse_color, random_color, too_similar};
use crate::seed::Seed;

/// Where a resolved color came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// Parsed from user input
    Explicit,
    /// Derived from a seed because input was absent or unrecognized
    Random,
}

/// A color together with its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColor {
    /// Final color
    pub color: Color,
    /// Origin of the color
    pub source: ColorSource,
}

impl ResolvedColor {
    /// Resolve user input, deriving from `seed` when it is absent or unrecognized
    pub fn resolve(input: Option<&str>, seed: &Seed) -> Self {
        input.and_then(parse_color).map_or_else(
            || Self {
                color: random_color(seed),
                source: ColorSource::Random,
            },
            |color| Self {
                color,
                source: ColorSource::Explicit,
            },
        )
    }

    /// Whether the color was derived rather than chosen
    pub const fn is_random(self) -> bool {
        matches!(self.source, ColorSource::Random)
    }
}

/// Final colors chosen for one pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Background color
    pub background: Color,
    /// Foreground color
    pub foreground: Color,
    /// Whether the background was inverted to restore contrast
    pub corrected: bool,
}

/// Resolve background and foreground for one pattern
///
/// The background derives from `root_seed`, the foreground from
/// `color_seed`. Only when both were derived and end up too similar is the
/// background inverted; explicit user colors are never adjusted.
pub fn select_colors(
    background: Option<&str>,
    foreground: Option<&str>,
    root_seed: &Seed,
    color_seed: &Seed,
) -> ColorPair {
    let bg = ResolvedColor::resolve(background, root_seed);
    let fg = ResolvedColor::resolve(foreground, color_seed);

    let corrected = bg.is_random() && fg.is_random() && too_similar(bg.color, fg.color);
    let background = if corrected {
        bg.color.invert()
    } else {
        bg.color
    };

    ColorPair {
        background,
        foreground: fg.color,
        corrected,
    }
}
