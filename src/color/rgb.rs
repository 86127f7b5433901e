//! RGB color value type with hex conversion and seeded derivation

use crate::seed::Seed;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit-per-channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black, the fallback for unparseable input
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel tuple view
    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channel array view, the layout used by `image::Rgb`
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel complement (`255 - value`)
    #[must_use]
    pub const fn invert(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Parse a hex color with optional leading `#`
    ///
    /// Accepts exactly 3 or 6 hex digits. The short form duplicates each
    /// nibble, so `#f80` is `#ff8800`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHex`] for any other length or a non-hex digit
    pub fn from_hex(s: &str) -> Result<Self, InvalidHex> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidHex(s.to_string()));
        }

        let digits: Vec<u8> = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        match digits.as_slice() {
            &[r, g, b] => Ok(Self::new((r << 4) | r, (g << 4) | g, (b << 4) | b)),
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(InvalidHex(s.to_string())),
        }
    }

    /// Parse a hex color, substituting black on failure
    pub fn from_hex_or_black(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(Self::BLACK)
    }
}

/// Hex color input that is neither 3 nor 6 hex digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHex(pub String);

impl fmt::Display for InvalidHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color '{}': expected #RGB or #RRGGBB", self.0)
    }
}

impl std::error::Error for InvalidHex {}

impl FromStr for Color {
    type Err = InvalidHex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) | {}", self.r, self.g, self.b, self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self(color.to_array())
    }
}

/// Derivation stream used for seed-derived colors
pub const COLOR_STREAM: &str = "color";

/// Derive a color from a seed
///
/// Draws three independent channels from the [`COLOR_STREAM`] generator of
/// `seed`, which is separate from the stream that fills pattern cells.
pub fn random_color(seed: &Seed) -> Color {
    let mut rng = seed.stream_rng(COLOR_STREAM);
    Color::new(rng.random(), rng.random(), rng.random())
}
