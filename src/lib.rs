//! Grayscale hole filling with loopy max-product belief propagation
//!
//! The image is modelled as a pairwise Markov random field over a
//! four-connected grid. Missing intensities are recovered by running a fixed
//! number of asynchronous message-passing sweeps and decoding each unknown
//! pixel as the label maximizing its belief.

#![forbid(unsafe_code)]

/// Belief engine, message storage and the propagation driver
pub mod algorithm;
/// Image input/output, command-line handling and error types
pub mod io;
/// Pairwise potential and label-vector reductions
pub mod math;
/// Grid graph and hole geometry
pub mod spatial;

pub use algorithm::domain::MessageDomain;
pub use algorithm::driver::{
    InferenceConfig, inpaint_hole, run_inference, run_inference_with_observer,
};
pub use io::error::{InferenceError, Result};
