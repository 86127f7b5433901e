//! Size-capped on-disk image cache
//!
//! Images land in `<root>/<name>/<name>_<i>.png`. The directory size is
//! re-measured before every write; once it reaches the ceiling further writes
//! are skipped, nothing is evicted or truncated.

use crate::io::configuration::{CACHE_DIR_NAME, CACHE_LIMIT_BYTES, IMAGE_EXTENSION};
use crate::io::error::{GeneratorError, Result, file_system_error};
use crate::io::image::export_png;
use image::RgbImage;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of persisting a set of images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Directory the images were written to
    pub directory: PathBuf,
    /// Newly written files
    pub saved: Vec<PathBuf>,
    /// Files left untouched because they already existed
    pub existing: Vec<PathBuf>,
    /// Whether writing stopped at the size ceiling
    pub limit_reached: bool,
}

/// Cache directory with a hard byte ceiling
#[derive(Debug, Clone)]
pub struct ImageCache {
    root: PathBuf,
    limit_bytes: u64,
}

impl ImageCache {
    /// Cache rooted at `root` holding at most `limit_bytes`
    pub fn new(root: impl Into<PathBuf>, limit_bytes: u64) -> Self {
        Self {
            root: root.into(),
            limit_bytes,
        }
    }

    /// Cache in the user cache directory with the default ceiling
    pub fn default_location() -> Self {
        let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(CACHE_DIR_NAME), CACHE_LIMIT_BYTES)
    }

    /// Root directory of the cache
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configured ceiling in bytes
    pub const fn limit_bytes(&self) -> u64 {
        self.limit_bytes
    }

    /// Total size of all files below the root, zero if it does not exist
    pub fn size_bytes(&self) -> u64 {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.metadata().ok())
            .map(|metadata| metadata.len())
            .sum()
    }

    /// Whether the cache has reached its ceiling
    pub fn is_full(&self) -> bool {
        self.size_bytes() >= self.limit_bytes
    }

    /// Error describing a full cache, for user-facing notices
    pub fn limit_error(&self) -> GeneratorError {
        GeneratorError::CacheLimitExceeded {
            path: self.root.clone(),
            limit_bytes: self.limit_bytes,
        }
    }

    /// Directory holding the images saved under `name`
    pub fn directory_for(&self, name: &str) -> PathBuf {
        self.root.join(sanitize_name(name))
    }

    /// Persist `images` under `name`, numbered from 1
    ///
    /// Existing files are kept as they are. Stops early, without error, once
    /// the ceiling is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or an image
    /// cannot be written
    pub fn save_images(&self, images: &[RgbImage], name: &str) -> Result<SaveReport> {
        let directory = self.directory_for(name);
        let mut report = SaveReport {
            directory: directory.clone(),
            ..SaveReport::default()
        };

        if self.is_full() {
            report.limit_reached = true;
            return Ok(report);
        }

        std::fs::create_dir_all(&directory)
            .map_err(|e| file_system_error(&directory, "create directory", e))?;

        let stem = sanitize_name(name);
        for (index, image) in images.iter().enumerate() {
            if self.is_full() {
                report.limit_reached = true;
                break;
            }

            let path = directory.join(format!("{stem}_{}.{IMAGE_EXTENSION}", index + 1));
            if path.exists() {
                report.existing.push(path);
                continue;
            }

            export_png(image, &path)?;
            report.saved.push(path);
        }

        Ok(report)
    }
}

/// Make a seed name safe to use as a single path component
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}
