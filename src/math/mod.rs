//! Mathematical utilities for the inference engine

/// Reductions over dense label vectors (argmax, log-sum-exp)
pub mod labels;
/// Truncated linear pairwise potential
pub mod potential;
