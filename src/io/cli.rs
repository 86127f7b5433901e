//! Command-line interface wiring seed, batch, rendering and persistence

use crate::batch::{BatchRequest, build_batch};
use crate::io::ascii::{AsciiCharset, ToneAdjustment, image_to_ascii_with};
use crate::io::cache::ImageCache;
use crate::io::configuration::{
    CACHE_LIMIT_BYTES, DEFAULT_ASCII_COLUMNS, DEFAULT_COLOR_WEIGHT, DEFAULT_COUNT,
    DEFAULT_IMAGE_SIZE, DEFAULT_SIZE, MAX_COUNT, MAX_IMAGE_SIZE, MAX_SIZE,
};
use crate::io::error::{Result, invalid_configuration};
use crate::io::image::{build_collage, export_png, render_pattern};
use crate::io::progress::ProgressManager;
use crate::seed::normalize_seed;
use clap::Parser;
use image::RgbImage;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pfp-generator")]
#[command(author, version, about = "Generate symmetric pixel-art profile pictures")]
/// Command-line arguments for the profile picture generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Text to generate the picture from; random when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Half-width of the base pattern
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Background color name or hex code
    #[arg(short, long)]
    pub background: Option<String>,

    /// Foreground color name or hex code
    #[arg(short, long)]
    pub color: Option<String>,

    /// Weight of the foreground color between 0 and 1
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_COLOR_WEIGHT,
        value_parser = parse_color_weight
    )]
    pub color_weight: f64,

    /// Number of pictures to generate from the seed
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, value_parser = parse_count)]
    pub count: usize,

    /// Save the pictures to the cache directory
    #[arg(long)]
    pub save: bool,

    /// Print the first picture as ASCII art
    #[arg(short, long)]
    pub ascii: bool,

    /// Character set for ASCII output
    #[arg(long, value_enum, default_value_t = AsciiCharset::Bars)]
    pub charset: AsciiCharset,

    /// Characters per line of ASCII output
    #[arg(long, default_value_t = DEFAULT_ASCII_COLUMNS)]
    pub columns: usize,

    /// Brightness offset applied before choosing ASCII characters
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Contrast change in percent applied before choosing ASCII characters
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f32>,

    /// Write the collage PNG to this path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pixel size of one rendered picture
    #[arg(
        long,
        default_value_t = DEFAULT_IMAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_IMAGE_SIZE))
    )]
    pub image_size: u32,

    /// Override the cache directory
    #[arg(long, value_name = "DIR", hide = true)]
    pub cache_dir: Option<PathBuf>,

    /// Suppress notices and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_color_weight(value: &str) -> std::result::Result<f64, String> {
    let weight: f64 = value
        .parse()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if (0.0..=1.0).contains(&weight) {
        Ok(weight)
    } else {
        Err(format!("{weight} is not between 0 and 1"))
    }
}

fn parse_count(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("at least one picture must be generated".to_string()),
        Ok(count) if count > MAX_COUNT => Err(format!("at most {MAX_COUNT} pictures per run")),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("'{value}' is not a valid count: {e}")),
    }
}

impl Cli {
    /// Check the pattern size before any generation happens
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the size is zero or above [`MAX_SIZE`]
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(invalid_configuration(
                "size",
                &self.size,
                &format!("size must be between 1 and {MAX_SIZE}"),
            ));
        }
        Ok(())
    }

    /// Whether ASCII art should be printed
    ///
    /// Falls back to ASCII output when nothing else would be produced.
    pub const fn wants_ascii(&self) -> bool {
        self.ascii || (!self.save && self.output.is_none())
    }

    /// Batch parameters described by the arguments
    pub fn batch_request(&self) -> BatchRequest {
        BatchRequest {
            count: self.count,
            size: self.size,
            color_weight: self.color_weight,
            background: self.background.clone(),
            foreground: self.color.clone(),
        }
    }

    /// Tone adjustment for ASCII output
    pub const fn tone(&self) -> ToneAdjustment {
        ToneAdjustment {
            brightness: self.brightness,
            contrast: self.contrast,
        }
    }

    /// Cache selected by the arguments
    pub fn cache(&self) -> ImageCache {
        self.cache_dir.as_ref().map_or_else(ImageCache::default_location, |dir| {
            ImageCache::new(dir.clone(), CACHE_LIMIT_BYTES)
        })
    }
}

/// Runs one generation request end to end
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate, render and emit the requested pictures
    ///
    /// An out-of-range size prints a notice and generates nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The batch parameters fail validation
    /// - The collage or cached images cannot be written
    // Allow print for user feedback and requested ASCII output
    #[allow(clippy::print_stderr, clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        if let Err(error) = self.cli.validate() {
            eprintln!("{error}");
            return Ok(());
        }

        let seed = normalize_seed(self.cli.text.as_deref());
        let batch = build_batch(seed, &self.cli.batch_request())?;
        let name = batch.name();

        if !self.cli.quiet {
            eprintln!("Seed: {name}");
            for item in batch.items() {
                eprintln!(
                    "  background {}  foreground {}{}",
                    item.colors.background.to_hex(),
                    item.colors.foreground.to_hex(),
                    if item.colors.corrected {
                        "  (background inverted for contrast)"
                    } else {
                        ""
                    }
                );
            }
        }

        let progress = if self.cli.quiet {
            ProgressManager::hidden()
        } else {
            ProgressManager::new(batch.len(), &name)
        };
        let patterns = batch.generate_with(|_| progress.complete_item());
        progress.finish();

        let images = patterns
            .iter()
            .map(|pattern| render_pattern(pattern, self.cli.image_size))
            .collect::<Result<Vec<_>>>()?;

        if let Some(ref output) = self.cli.output {
            export_png(&build_collage(&images, self.cli.image_size)?, output)?;
            if !self.cli.quiet {
                eprintln!("Collage written to {}", output.display());
            }
        }

        if self.cli.save {
            self.save(&images, &name)?;
        }

        if let Some(first) = images.first().filter(|_| self.cli.wants_ascii()) {
            println!(
                "{}",
                image_to_ascii_with(first, self.cli.columns, self.cli.charset, self.cli.tone())
            );
        }

        Ok(())
    }

    // Allow print for cache notices
    #[allow(clippy::print_stderr)]
    fn save(&self, images: &[RgbImage], name: &str) -> Result<()> {
        let cache = self.cli.cache();
        let report = cache.save_images(images, name)?;

        if report.limit_reached {
            // Persistence is skipped, generation still succeeded
            eprintln!("{}", cache.limit_error());
        } else if !self.cli.quiet {
            eprintln!("Profile pictures saved to {}", report.directory.display());
        }
        Ok(())
    }
}
