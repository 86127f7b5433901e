//! Raster rendering, collage layout and PNG export

use crate::io::configuration::{MAX_IMAGE_SIZE, PER_ROW};
use crate::io::error::{GeneratorError, Result, file_system_error, invalid_configuration};
use crate::pattern::Pattern;
use image::{Rgb, RgbImage, imageops};
use std::path::Path;

/// Render a pattern one pixel per cell
pub fn pattern_to_image(pattern: &Pattern) -> RgbImage {
    let width = pattern.cols() as u32;
    let height = pattern.rows() as u32;
    RgbImage::from_fn(width, height, |x, y| {
        pattern
            .get(y as usize, x as usize)
            .map_or(Rgb([0, 0, 0]), Rgb::from)
    })
}

/// Render a pattern as a `side × side` square with crisp pixel blocks
///
/// Each output pixel takes the color of the cell it falls in, with no
/// smoothing between neighbouring cells.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `side` is zero or exceeds [`MAX_IMAGE_SIZE`]
pub fn render_pattern(pattern: &Pattern, side: u32) -> Result<RgbImage> {
    check_side(side)?;

    let rows = pattern.rows() as u64;
    let cols = pattern.cols() as u64;
    let side_u64 = u64::from(side);
    Ok(RgbImage::from_fn(side, side, |x, y| {
        let row = u64::from(y) * rows / side_u64;
        let col = u64::from(x) * cols / side_u64;
        pattern
            .get(row as usize, col as usize)
            .map_or(Rgb([0, 0, 0]), Rgb::from)
    }))
}

fn check_side(side: u32) -> Result<()> {
    if side == 0 || side > MAX_IMAGE_SIZE {
        return Err(invalid_configuration(
            "image_size",
            &side,
            &format!("image size must be between 1 and {MAX_IMAGE_SIZE}"),
        ));
    }
    Ok(())
}

/// Grid dimensions `(columns, rows)` for a collage of `count` images
pub const fn collage_grid(count: usize) -> (usize, usize) {
    let cols = if count < PER_ROW { count } else { PER_ROW };
    let rows = count.div_ceil(PER_ROW);
    (cols, rows)
}

/// Arrange rendered images left to right, [`PER_ROW`] per row
///
/// All images are expected to be `side × side`.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `side` is out of range or the collage
/// dimensions do not fit in `u32`
pub fn build_collage(images: &[RgbImage], side: u32) -> Result<RgbImage> {
    check_side(side)?;
    let (cols, rows) = collage_grid(images.len());
    let extent = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(side))
            .ok_or_else(|| {
                invalid_configuration(
                    "count",
                    &images.len(),
                    &"collage dimensions exceed the image size limit",
                )
            })
    };
    let mut collage = RgbImage::new(extent(cols)?, extent(rows)?);

    for (index, image) in images.iter().enumerate() {
        let row = index / PER_ROW;
        let col = index % PER_ROW;
        imageops::replace(
            &mut collage,
            image,
            i64::from(side) * col as i64,
            i64::from(side) * row as i64,
        );
    }

    Ok(collage)
}

/// Save an image as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image
        .save(output_path)
        .map_err(|e| GeneratorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
