//! Color model: value type, named and hex parsing, perceptual distance

/// Redmean distance and similarity test
pub mod distance;
/// Named color lookup table
pub mod names;
/// RGB value type and hex conversion
pub mod rgb;

pub use distance::{COLOR_THRESHOLD, distance, too_similar};
pub use names::parse_named_color;
pub use rgb::{Color, random_color};

/// Resolve user color input as a name or a hex code
///
/// Names are tried first and are case-sensitive. Returns `None` for anything
/// unrecognized so the caller can substitute its own color.
pub fn parse_color(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_named_color(trimmed).or_else(|| Color::from_hex(trimmed).ok())
}

/// Resolve user color input, substituting `fallback` when unrecognized
pub fn parse_color_or(input: &str, fallback: Color) -> Color {
    parse_color(input).unwrap_or(fallback)
}
