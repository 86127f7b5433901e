//! Tests for colorized ASCII-art rendering

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use pfpgen::color::Color;
    use pfpgen::io::ascii::{
        AsciiCharset, ToneAdjustment, colorize_text, image_to_ascii, image_to_ascii_with,
    };

    const RESET: &str = "\x1b[0m";

    // Tests the escape sequence wraps the text
    // Verified by swapping channel order
    #[test]
    fn test_colorize_text() {
        let painted = colorize_text("#", Color::new(1, 2, 3));
        assert_eq!(painted, "\x1b[38;2;1;2;3m#\x1b[0m");
    }

    // Tests cells are twice as tall as wide
    // Verified by using square cells
    #[test]
    fn test_line_count() {
        let image = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        let art = image_to_ascii(&image, 8, AsciiCharset::Simple);

        let lines: Vec<&str> = art.split('\n').collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.matches(RESET).count(), 8);
        }
        assert!(!art.ends_with('\n'));
    }

    // Tests luminance picks the ramp position
    // Verified by inverting the ramp lookup
    #[test]
    fn test_luminance_mapping() {
        let black = RgbImage::from_pixel(4, 8, Rgb([0, 0, 0]));
        let white = RgbImage::from_pixel(4, 8, Rgb([255, 255, 255]));

        let dark = image_to_ascii(&black, 4, AsciiCharset::Simple);
        let light = image_to_ascii(&white, 4, AsciiCharset::Simple);

        assert!(dark.contains("\x1b[38;2;0;0;0m@"));
        assert!(light.contains("\x1b[38;2;255;255;255m "));
    }

    // Tests the bar charset paints blocks in the cell color
    // Verified by using luminance for the color
    #[test]
    fn test_bars_use_cell_color() {
        let mut image = RgbImage::from_pixel(4, 2, Rgb([200, 0, 0]));
        for y in 0..2 {
            for x in 2..4 {
                image.put_pixel(x, y, Rgb([0, 0, 200]));
            }
        }

        let art = image_to_ascii(&image, 2, AsciiCharset::Bars);
        assert_eq!(
            art,
            format!("\x1b[38;2;200;0;0m█{RESET}\x1b[38;2;0;0;200m█{RESET}")
        );
    }

    // Tests brightness moves the glyph while the painted color stays put
    // Verified by sampling colors from the adjusted image
    #[test]
    fn test_brightness_changes_glyph() {
        let image = RgbImage::from_pixel(4, 8, Rgb([128, 128, 128]));
        let brighter = ToneAdjustment {
            brightness: Some(100),
            contrast: None,
        };
        let darker = ToneAdjustment {
            brightness: Some(-100),
            contrast: None,
        };

        let plain = image_to_ascii(&image, 4, AsciiCharset::Simple);
        let lifted = image_to_ascii_with(&image, 4, AsciiCharset::Simple, brighter);
        let dimmed = image_to_ascii_with(&image, 4, AsciiCharset::Simple, darker);

        assert!(plain.contains("\x1b[38;2;128;128;128m="));
        assert!(lifted.contains("\x1b[38;2;128;128;128m."));
        assert!(dimmed.contains("\x1b[38;2;128;128;128m%"));
    }

    // Tests contrast pushes light cells to the sparse end of the ramp
    // Verified by applying contrast after grayscale with the wrong sign
    #[test]
    fn test_contrast_changes_glyph() {
        let image = RgbImage::from_pixel(4, 8, Rgb([200, 200, 200]));
        let tone = ToneAdjustment {
            brightness: None,
            contrast: Some(100.0),
        };

        let plain = image_to_ascii(&image, 4, AsciiCharset::Simple);
        let sharpened = image_to_ascii_with(&image, 4, AsciiCharset::Simple, tone);

        assert!(plain.contains("\x1b[38;2;200;200;200m:"));
        assert!(sharpened.contains("\x1b[38;2;200;200;200m "));
        assert_ne!(plain, sharpened);
    }

    // Tests the default adjustment is a no-op
    // Verified by brightening by one in the default
    #[test]
    fn test_default_tone_is_identity() {
        let image = RgbImage::from_pixel(3, 3, Rgb([10, 90, 250]));
        let tone = ToneAdjustment::default();
        assert!(tone.is_identity());
        assert_eq!(tone.apply(&image), image);
        assert_eq!(
            image_to_ascii_with(&image, 3, AsciiCharset::Complex, tone),
            image_to_ascii(&image, 3, AsciiCharset::Complex)
        );
    }

    // Tests degenerate inputs produce no output
    // Verified by removing the zero checks
    #[test]
    fn test_empty_inputs() {
        let image = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        assert!(image_to_ascii(&image, 0, AsciiCharset::Bars).is_empty());
        assert!(image_to_ascii(&RgbImage::new(0, 0), 4, AsciiCharset::Bars).is_empty());
    }

    // Tests ramps run from dense to sparse
    // Verified by reversing a ramp
    #[test]
    fn test_charset_ramps() {
        assert!(AsciiCharset::Simple.characters().starts_with('@'));
        assert!(AsciiCharset::Simple.characters().ends_with(' '));
        assert_eq!(AsciiCharset::Bars.characters(), "█");
        assert!(AsciiCharset::Complex.characters().starts_with('$'));
        assert_eq!(AsciiCharset::default(), AsciiCharset::Bars);
    }
}
