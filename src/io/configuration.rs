//! Generator constants and runtime configuration defaults

// Pattern parameters
/// Default half-width of the generated pattern
pub const DEFAULT_SIZE: usize = 5;

// Guards against unbounded memory from erroneous input
/// Maximum allowed half-width of a pattern
pub const MAX_SIZE: usize = 100;

/// Default sampling weight of the foreground color
pub const DEFAULT_COLOR_WEIGHT: f64 = 0.35;

/// Default number of images generated per run
pub const DEFAULT_COUNT: usize = 1;

/// Maximum number of images generated per run
pub const MAX_COUNT: usize = 100;

// Rendering settings
/// Side length in pixels of one rendered pattern
pub const DEFAULT_IMAGE_SIZE: u32 = 256;

// Keeps a full collage of MAX_COUNT images addressable in memory
/// Maximum side length in pixels of one rendered pattern
pub const MAX_IMAGE_SIZE: u32 = 1024;

/// Number of patterns per collage row
pub const PER_ROW: usize = 5;

/// Default number of character columns for ASCII output
pub const DEFAULT_ASCII_COLUMNS: usize = 40;

// Cache settings
/// Hard ceiling for the on-disk cache in bytes (5 MiB)
pub const CACHE_LIMIT_BYTES: u64 = 5 * 1024 * 1024;

/// Cache directory name below the user cache root
pub const CACHE_DIR_NAME: &str = "pfp-generator";

/// Extension of persisted images
pub const IMAGE_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
