//! Rectangular holes and the padded inference windows cut around them

use crate::io::configuration::HOLE_BORDER;
use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, Axis, Slice};
use std::ops::Range;

/// Axis-aligned rectangle of unknown pixels, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleRect {
    /// Top-left corner [row, col]
    pub min: [usize; 2],
    /// Bottom-right corner [row, col]
    pub max: [usize; 2],
}

/// A rectangular region defined by row and column ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Row indices range
    pub rows: Range<usize>,
    /// Column indices range
    pub cols: Range<usize>,
}

impl Region {
    /// Create a new region from row and column ranges
    pub const fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    /// Get a clone of the row range
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Get a clone of the column range
    pub fn cols(&self) -> Range<usize> {
        self.cols.clone()
    }

    /// Range covered along `axis`: rows for axis 0, columns for any other
    pub fn axis_slice(&self, axis: Axis) -> Slice {
        if axis == Axis(0) {
            Slice::from(self.rows())
        } else {
            Slice::from(self.cols())
        }
    }

    /// Region dimensions (rows, cols)
    pub const fn dim(&self) -> (usize, usize) {
        (
            self.rows.end.saturating_sub(self.rows.start),
            self.cols.end.saturating_sub(self.cols.start),
        )
    }
}

impl HoleRect {
    /// Create a hole from inclusive corner coordinates
    pub const fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            min: [top, left],
            max: [bottom, right],
        }
    }

    /// Check if a position is within the hole
    pub const fn contains(&self, pos: [usize; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Ensure the hole is well-formed and fits inside a `rows x cols` image
    ///
    /// # Errors
    ///
    /// Returns an error if the corners are inverted or the hole extends past
    /// the image
    pub fn validate(&self, rows: usize, cols: usize) -> Result<()> {
        if self.min[0] > self.max[0] || self.min[1] > self.max[1] {
            return Err(invalid_parameter(
                "hole",
                self,
                &"top-left corner must not lie below or right of bottom-right corner",
            ));
        }
        if self.max[0] >= rows || self.max[1] >= cols {
            return Err(invalid_parameter(
                "hole",
                self,
                &format!("hole does not fit inside a {rows}x{cols} image"),
            ));
        }
        Ok(())
    }

    /// Hole grown by the observed border and clamped to the image
    pub fn padded_window(&self, rows: usize, cols: usize) -> Region {
        let row_start = self.min[0].saturating_sub(HOLE_BORDER);
        let col_start = self.min[1].saturating_sub(HOLE_BORDER);
        let row_end = (self.max[0] + HOLE_BORDER + 1).min(rows);
        let col_end = (self.max[1] + HOLE_BORDER + 1).min(cols);
        Region::new(row_start..row_end, col_start..col_end)
    }

    /// Observed-mask over `window`: every cell outside the hole is observed
    pub fn observed_mask(&self, window: &Region) -> Array2<bool> {
        let origin = [window.rows.start, window.cols.start];
        Array2::from_shape_fn(window.dim(), |(row, col)| {
            !self.contains([origin[0] + row, origin[1] + col])
        })
    }
}

impl std::fmt::Display for HoleRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows {}..={}, cols {}..={}",
            self.min[0], self.max[0], self.min[1], self.max[1]
        )
    }
}
