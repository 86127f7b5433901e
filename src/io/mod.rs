//! Presentation, persistence and process-level concerns

/// Colorized ASCII-art rendering
pub mod ascii;
/// Size-capped image cache
pub mod cache;
/// Command-line interface and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Raster rendering and collage layout
pub mod image;
/// Batch progress display
pub mod progress;
