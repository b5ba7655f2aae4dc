//! Input/output operations, configuration and error handling

/// Command-line interface
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Grayscale image loading and saving
pub mod image;
/// Progress reporting for propagation runs
pub mod progress;
