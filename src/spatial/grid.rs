//! Grid graph arena with neighbour indices and per-node message inboxes
//!
//! Nodes live in a single row-major `Vec` and refer to each other by index,
//! so traversal of the (cyclic) grid never needs shared ownership. The
//! observed flags are kept in a bitset alongside the arena; they are fixed at
//! construction and never change afterwards.

use crate::algorithm::messages::MessageStore;
use crate::io::error::{InferenceError, Result};
use bitvec::prelude::*;
use ndarray::{Array2, ArrayView2};
use num_traits::PrimInt;
use std::fmt::Display;

/// Index of a node within the arena (row-major position)
pub type NodeId = usize;

/// A single grid vertex
#[derive(Debug, Clone)]
pub struct Node {
    /// Fixed intensity for observed nodes, decoded intensity for the rest
    value: Option<u8>,
    /// Adjacent node ids in ascending order
    neighbors: Vec<NodeId>,
    /// Most recent message received from each neighbour
    inbox: MessageStore,
}

impl Node {
    /// Current intensity, if known
    pub const fn value(&self) -> Option<u8> {
        self.value
    }

    /// Adjacent node ids in ascending order
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Messages received from neighbours
    pub const fn inbox(&self) -> &MessageStore {
        &self.inbox
    }
}

/// Four-connected `rows x cols` grid over an intensity matrix
#[derive(Debug, Clone)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    observed: BitVec,
}

impl GridGraph {
    /// Build the grid from an intensity matrix and an observed-mask
    ///
    /// Values under unobserved cells are ignored. Construction is all or
    /// nothing: on error no graph is produced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The matrix and mask dimensions differ (`InvalidShape`)
    /// - Either dimension is zero (`EmptyGrid`)
    /// - An observed cell lies outside `0..=255` (`OutOfRangeIntensity`)
    pub fn from_matrix<T>(
        intensities: ArrayView2<'_, T>,
        observed: ArrayView2<'_, bool>,
    ) -> Result<Self>
    where
        T: PrimInt + Display,
    {
        if intensities.dim() != observed.dim() {
            return Err(InferenceError::InvalidShape {
                intensities: intensities.dim(),
                mask: observed.dim(),
            });
        }

        let (rows, cols) = intensities.dim();
        if rows == 0 || cols == 0 {
            return Err(InferenceError::EmptyGrid {
                dimensions: (rows, cols),
            });
        }

        let mut observed_bits = bitvec![0; rows * cols];
        let mut nodes = Vec::with_capacity(rows * cols);

        for (((row, col), &raw), &is_observed) in intensities.indexed_iter().zip(observed.iter()) {
            let value = if is_observed {
                let intensity =
                    raw.to_u8()
                        .ok_or_else(|| InferenceError::OutOfRangeIntensity {
                            position: [row, col],
                            value: raw.to_string(),
                        })?;
                observed_bits.set(row * cols + col, true);
                Some(intensity)
            } else {
                None
            };

            nodes.push(Node {
                value,
                neighbors: grid_neighbors(row, col, rows, cols),
                inbox: MessageStore::new(),
            });
        }

        Ok(Self {
            rows,
            cols,
            nodes,
            observed: observed_bits,
        })
    }

    /// Number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of nodes (`rows * cols`)
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids in row-major order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        0..self.nodes.len()
    }

    /// Unobserved node ids in row-major order
    pub fn unobserved(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.observed.iter_zeros()
    }

    /// Number of unobserved nodes
    pub fn unobserved_count(&self) -> usize {
        self.observed.count_zeros()
    }

    /// Node lookup
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Whether the node's intensity was supplied by the caller
    pub fn is_observed(&self, id: NodeId) -> bool {
        self.observed.get(id).as_deref() == Some(&true)
    }

    /// Known intensity of a node (observed value or decoded label)
    pub fn value(&self, id: NodeId) -> Option<u8> {
        self.nodes.get(id).and_then(Node::value)
    }

    /// Neighbour ids of a node in ascending order
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |node| node.neighbors.as_slice())
    }

    /// Read access to a node's inbox
    pub fn inbox(&self, id: NodeId) -> Option<&MessageStore> {
        self.nodes.get(id).map(|node| &node.inbox)
    }

    /// Write access to a node's inbox
    pub fn inbox_mut(&mut self, id: NodeId) -> Option<&mut MessageStore> {
        self.nodes.get_mut(id).map(|node| &mut node.inbox)
    }

    /// Record the decoded intensity of an unobserved node
    ///
    /// Observed nodes are authoritative and are left untouched; returns
    /// whether the value was stored.
    pub fn set_decoded(&mut self, id: NodeId, label: u8) -> bool {
        if self.is_observed(id) {
            return false;
        }
        self.nodes.get_mut(id).is_some_and(|node| {
            node.value = Some(label);
            true
        })
    }

    /// Grid coordinates `[row, col]` of a node
    pub const fn position(&self, id: NodeId) -> [usize; 2] {
        [id / self.cols, id % self.cols]
    }

    /// Node id at grid coordinates, if in bounds
    pub const fn id_at(&self, row: usize, col: usize) -> Option<NodeId> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Every undirected edge once, as `(low, high)` id pairs
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(id, node)| {
                node.neighbors
                    .iter()
                    .filter(move |&&neighbor| neighbor > id)
                    .map(move |&neighbor| (id, neighbor))
            })
            .collect()
    }

    /// Intensity matrix of the grid
    ///
    /// Nodes without a known value (unobserved and not yet decoded) read as 0.
    pub fn to_matrix(&self) -> Array2<u8> {
        Array2::from_shape_fn((self.rows, self.cols), |(row, col)| {
            self.value(row * self.cols + col).unwrap_or(0)
        })
    }
}

/// Up, left, right, down neighbours of a cell; ascending id order
fn grid_neighbors(row: usize, col: usize, rows: usize, cols: usize) -> Vec<NodeId> {
    let id = row * cols + col;
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push(id - cols);
    }
    if col > 0 {
        neighbors.push(id - 1);
    }
    if col + 1 < cols {
        neighbors.push(id + 1);
    }
    if row + 1 < rows {
        neighbors.push(id + cols);
    }
    neighbors
}
