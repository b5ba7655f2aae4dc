//! Error types for grid construction, configuration and image handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all inference operations
#[derive(Debug)]
pub enum InferenceError {
    /// Intensity matrix and observed-mask disagree on dimensions
    InvalidShape {
        /// Dimensions of the intensity matrix (rows, cols)
        intensities: (usize, usize),
        /// Dimensions of the observed-mask (rows, cols)
        mask: (usize, usize),
    },

    /// An observed cell holds a value outside the label domain
    OutOfRangeIntensity {
        /// Grid position of the offending cell [row, col]
        position: [usize; 2],
        /// The rejected value
        value: String,
    },

    /// Grid has zero rows or zero columns
    EmptyGrid {
        /// Provided dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { intensities, mask } => {
                write!(
                    f,
                    "Intensity matrix is {}x{} but observed mask is {}x{}",
                    intensities.0, intensities.1, mask.0, mask.1
                )
            }
            Self::OutOfRangeIntensity { position, value } => {
                write!(
                    f,
                    "Observed intensity {value} at ({}, {}) is outside 0..=255",
                    position[0], position[1]
                )
            }
            Self::EmptyGrid { dimensions } => {
                write!(
                    f,
                    "Grid must have at least one row and column (got {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for InferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for inference results
pub type Result<T> = std::result::Result<T, InferenceError>;

impl From<image::ImageError> for InferenceError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for InferenceError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> InferenceError {
    InferenceError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
