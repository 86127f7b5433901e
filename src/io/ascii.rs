//! Colorized ASCII-art rendering of patterns
//!
//! The image is split into cells twice as tall as they are wide to match
//! terminal glyph proportions. Each cell picks a character by its mean
//! luminance and is painted with its mean color using 24-bit ANSI escapes.
//! An optional [`ToneAdjustment`] shifts the luminance used for glyph choice
//! without touching the painted colors.

use crate::color::Color;
use clap::ValueEnum;
use image::{GrayImage, RgbImage, imageops};
use std::ops::Range;

/// Character ramps ordered from dense to sparse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AsciiCharset {
    /// Ten-step ramp
    Simple,
    /// Solid blocks, color only
    #[default]
    Bars,
    /// Long ramp with fine gradations
    Complex,
}

impl AsciiCharset {
    /// Characters of the ramp
    pub const fn characters(self) -> &'static str {
        match self {
            Self::Simple => "@%#*+=-:. ",
            Self::Bars => "█",
            Self::Complex => {
                r#"$@B%8&WM#*zcvunxrjft/\|()1{}[]?-_+~<>i!lI;;::,,,"""^^^`````'''''.......     "#
            }
        }
    }
}

/// Contrast and brightness applied before glyph selection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneAdjustment {
    /// Additive brightness offset per channel, negative to darken
    pub brightness: Option<i32>,
    /// Contrast change in percent, negative to flatten
    pub contrast: Option<f32>,
}

impl ToneAdjustment {
    /// Whether the adjustment leaves the image unchanged
    pub const fn is_identity(self) -> bool {
        self.brightness.is_none() && self.contrast.is_none()
    }

    /// Apply contrast, then brightness
    pub fn apply(self, image: &RgbImage) -> RgbImage {
        let mut adjusted = image.clone();
        if let Some(amount) = self.contrast {
            adjusted = imageops::contrast(&adjusted, amount);
        }
        if let Some(offset) = self.brightness {
            adjusted = imageops::brighten(&adjusted, offset);
        }
        adjusted
    }
}

/// Wrap `text` in a 24-bit foreground color escape
pub fn colorize_text(text: &str, color: Color) -> String {
    format!(
        "\x1b[38;2;{};{};{}m{text}\x1b[0m",
        color.r, color.g, color.b
    )
}

// Pixel span covered by cell `index` of extent `cell` in an axis of `limit` pixels
fn cell_span(index: usize, cell: f64, limit: u32) -> Range<u32> {
    let start = (index as f64 * cell) as u32;
    let end = (((index + 1) as f64 * cell) as u32).min(limit);
    start.min(end)..end
}

struct CellSample {
    luminance: f64,
    color: Color,
}

fn sample_cell(
    gray: &GrayImage,
    image: &RgbImage,
    rows: Range<u32>,
    cols: Range<u32>,
) -> CellSample {
    let mut count = 0u64;
    let mut luminance = 0u64;
    let mut channels = [0u64; 3];

    for y in rows {
        for x in cols.clone() {
            count += 1;
            luminance += u64::from(gray.get_pixel(x, y).0[0]);
            for (sum, value) in channels.iter_mut().zip(image.get_pixel(x, y).0) {
                *sum += u64::from(value);
            }
        }
    }

    if count == 0 {
        return CellSample {
            luminance: 0.0,
            color: Color::BLACK,
        };
    }

    let [r, g, b] = channels.map(|sum| (sum / count) as u8);
    CellSample {
        luminance: luminance as f64 / count as f64,
        color: Color::new(r, g, b),
    }
}

/// Convert an image to colorized ASCII art with `columns` characters per line
///
/// Lines are separated by `\n` with no trailing newline. Returns an empty
/// string for an empty image or zero columns.
pub fn image_to_ascii(image: &RgbImage, columns: usize, charset: AsciiCharset) -> String {
    image_to_ascii_with(image, columns, charset, ToneAdjustment::default())
}

/// Convert an image to colorized ASCII art after adjusting its tone
///
/// `tone` only affects which glyph each cell gets. Colors are sampled from
/// the unadjusted image.
pub fn image_to_ascii_with(
    image: &RgbImage,
    columns: usize,
    charset: AsciiCharset,
    tone: ToneAdjustment,
) -> String {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || columns == 0 {
        return String::new();
    }

    let columns = columns.min(width as usize);
    let ramp: Vec<char> = charset.characters().chars().collect();
    let num_chars = ramp.len();

    let gray = if tone.is_identity() {
        imageops::grayscale(image)
    } else {
        imageops::grayscale(&tone.apply(image))
    };
    let cell_width = f64::from(width) / columns as f64;
    let cell_height = 2.0 * cell_width;
    let num_rows = ((f64::from(height) / cell_height).round() as usize).max(1);

    let lines: Vec<String> = (0..num_rows)
        .map(|row| {
            let row_span = cell_span(row, cell_height, height);
            (0..columns)
                .map(|col| {
                    let col_span = cell_span(col, cell_width, width);
                    let sample = sample_cell(&gray, image, row_span.clone(), col_span);
                    let index = ((sample.luminance * num_chars as f64 / 255.0) as usize)
                        .min(num_chars - 1);
                    let glyph = ramp.get(index).copied().unwrap_or(' ');
                    colorize_text(&glyph.to_string(), sample.color)
                })
                .collect()
        })
        .collect();

    lines.join("\n")
}
