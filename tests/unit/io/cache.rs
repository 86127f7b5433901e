//! Tests for the size-capped image cache

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use pfpgen::io::cache::{ImageCache, sanitize_name};
    use std::path::Path;

    fn solid(side: u32) -> RgbImage {
        RgbImage::from_pixel(side, side, Rgb([10, 20, 30]))
    }

    fn temp_root() -> tempfile::TempDir {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        dir
    }

    // Tests images are numbered from one inside a per-seed directory
    // Verified by numbering from zero
    #[test]
    fn test_save_images_layout() {
        let root = temp_root();
        let cache = ImageCache::new(root.path(), 1024 * 1024);

        let Ok(report) = cache.save_images(&[solid(4), solid(4)], "hello") else {
            unreachable!("cache writes succeed");
        };

        assert!(!report.limit_reached);
        assert_eq!(report.directory, root.path().join("hello"));
        assert_eq!(report.saved.len(), 2);
        assert!(root.path().join("hello").join("hello_1.png").exists());
        assert!(root.path().join("hello").join("hello_2.png").exists());
        assert!(cache.size_bytes() > 0);
    }

    // Tests existing files are never overwritten
    // Verified by always writing files
    #[test]
    fn test_save_images_keeps_existing() {
        let root = temp_root();
        let cache = ImageCache::new(root.path(), 1024 * 1024);

        let first = cache.save_images(&[solid(4)], "again");
        assert!(first.is_ok());
        let path = root.path().join("again").join("again_1.png");
        let Ok(before) = std::fs::metadata(&path).and_then(|m| m.modified()) else {
            unreachable!("file was written");
        };

        let Ok(second) = cache.save_images(&[solid(8), solid(4)], "again") else {
            unreachable!("cache writes succeed");
        };
        assert_eq!(second.existing, vec![path.clone()]);
        assert_eq!(second.saved.len(), 1);

        let Ok(after) = std::fs::metadata(&path).and_then(|m| m.modified()) else {
            unreachable!("file still exists");
        };
        assert_eq!(before, after);
        assert_eq!(image::image_dimensions(&path).ok(), Some((4, 4)));
    }

    // Tests a full cache skips writes without failing
    // Verified by removing the ceiling check
    #[test]
    fn test_save_images_limit_reached() {
        let root = temp_root();
        let cache = ImageCache::new(root.path(), 0);

        assert!(cache.is_full());
        let Ok(report) = cache.save_images(&[solid(4)], "full") else {
            unreachable!("a full cache is not an error");
        };
        assert!(report.limit_reached);
        assert!(report.saved.is_empty());
        assert!(!root.path().join("full").exists());
    }

    // Tests writing stops once the ceiling is crossed mid-batch
    // Verified by checking the ceiling only once
    #[test]
    fn test_save_images_stops_at_limit() {
        let root = temp_root();
        let cache = ImageCache::new(root.path(), 1);

        let Ok(report) = cache.save_images(&[solid(4), solid(4), solid(4)], "partial") else {
            unreachable!("cache writes succeed");
        };
        assert!(report.limit_reached);
        assert_eq!(report.saved.len(), 1);
    }

    // Tests a missing root measures as empty
    // Verified by propagating walk errors
    #[test]
    fn test_size_of_missing_root() {
        let cache = ImageCache::new(Path::new("/nonexistent/pfp-cache"), 10);
        assert_eq!(cache.size_bytes(), 0);
        assert!(!cache.is_full());
        assert_eq!(cache.limit_bytes(), 10);
    }

    // Tests the limit notice points at the cache root
    // Verified by reporting the per-seed directory instead
    #[test]
    fn test_limit_error_names_root() {
        let cache = ImageCache::new("/tmp/pfp-root", 5);
        let message = cache.limit_error().to_string();
        assert!(message.contains("/tmp/pfp-root"));
        assert_eq!(cache.root(), Path::new("/tmp/pfp-root"));
    }

    // Tests seed names become single path components
    // Verified by keeping path separators
    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("hello"), "hello");
        assert_eq!(sanitize_name("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_name("two words"), "two_words");
        assert_eq!(sanitize_name("my-seed_1"), "my-seed_1");
        assert_eq!(sanitize_name(""), "_");
        assert_eq!(sanitize_name(".."), "__");
    }
}
