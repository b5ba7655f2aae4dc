//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The grid graph arena that carries the messages
//! - Hole rectangles and the windows cropped around them

/// Grid graph construction, adjacency and node storage
pub mod grid;
/// Hole rectangles and padded inference windows
pub mod region;

pub use grid::{GridGraph, NodeId};
pub use region::{HoleRect, Region};
