//! Inference constants and runtime configuration defaults

// Label domain for 8-bit grayscale intensities
/// Number of candidate labels per node (one per intensity value)
pub const LABEL_COUNT: usize = 256;
/// Largest representable intensity
pub const MAX_INTENSITY: u8 = 255;

// Default values for configurable parameters
/// Number of full propagation sweeps run before decoding
pub const DEFAULT_SWEEP_COUNT: usize = 50;

/// Clipping bound for the truncated linear pairwise potential
pub const DEFAULT_POTENTIAL_CAPACITY: f64 = 50.0;

// The inference window keeps one ring of known pixels around the hole
/// Width of the observed border kept around a hole when cropping
pub const HOLE_BORDER: usize = 1;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_inpainted";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
