//! Grayscale image loading and saving

use crate::io::error::{InferenceError, Result};
use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView2};
use std::path::Path;

/// Load an image as an 8-bit luma matrix indexed `[row, col]`
///
/// Color images are converted to luma.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_grayscale(path: &Path) -> Result<Array2<u8>> {
    let img = image::open(path).map_err(|e| InferenceError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();

    Ok(Array2::from_shape_fn(
        (height as usize, width as usize),
        |(row, col)| luma.get_pixel(col as u32, row as u32).0[0],
    ))
}

/// Save a luma matrix as an image; the format follows the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_grayscale(matrix: ArrayView2<'_, u8>, output_path: &Path) -> Result<()> {
    let (rows, cols) = matrix.dim();
    let mut img = GrayImage::new(cols as u32, rows as u32);

    for ((row, col), &value) in matrix.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([value]));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| InferenceError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| InferenceError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
