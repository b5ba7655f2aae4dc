//! Truncated linear pairwise potential between neighbouring intensities

use crate::io::configuration::{DEFAULT_POTENTIAL_CAPACITY, MAX_INTENSITY};
use ndarray::Array1;

/// Log-domain compatibility between the labels of two adjacent nodes
///
/// The penalty grows linearly with the intensity difference and saturates at
/// `capacity`, so a single sharp edge in the observed data cannot dominate
/// the messages it feeds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairwisePotential {
    capacity: f64,
}

impl Default for PairwisePotential {
    fn default() -> Self {
        Self::new(DEFAULT_POTENTIAL_CAPACITY)
    }
}

impl PairwisePotential {
    /// Create a potential clipped at `capacity`
    ///
    /// Callers are expected to pass a finite, non-negative capacity; see
    /// `InferenceConfig::validate`.
    pub const fn new(capacity: f64) -> Self {
        Self { capacity }
    }

    /// Clipping bound of the potential
    pub const fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Compute `-min(|a - b|, capacity)`
    pub fn log_compatibility(&self, a: u8, b: u8) -> f64 {
        -f64::from(a.abs_diff(b)).min(self.capacity)
    }

    /// Potential of every candidate label against a fixed intensity
    ///
    /// Entry `l` holds `log_compatibility(l, value)`.
    pub fn message_from_observed(&self, value: u8) -> Array1<f64> {
        Array1::from_iter(labels().map(|label| self.log_compatibility(label, value)))
    }
}

/// All labels of the intensity domain in ascending order
pub const fn labels() -> impl Iterator<Item = u8> + Clone {
    0..=MAX_INTENSITY
}
