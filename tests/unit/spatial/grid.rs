//! Tests for grid graph construction, adjacency and validation

#[cfg(test)]
mod tests {
    use mrf_inpaint::InferenceError;
    use mrf_inpaint::spatial::GridGraph;
    use ndarray::{Array2, array};

    fn fully_observed(rows: usize, cols: usize) -> GridGraph {
        let intensities = Array2::<u8>::from_shape_fn((rows, cols), |(r, c)| (r * cols + c) as u8);
        let mask = Array2::from_elem((rows, cols), true);
        GridGraph::from_matrix(intensities.view(), mask.view()).unwrap()
    }

    // Tests node count and neighbour degrees for interior, edge and corner nodes
    // Verified by dropping the right-hand neighbour
    #[test]
    fn test_grid_node_count_and_degrees() {
        for (rows, cols) in [(3, 3), (4, 5), (6, 2)] {
            let graph = fully_observed(rows, cols);
            assert_eq!(graph.node_count(), rows * cols);

            for id in graph.nodes() {
                let [row, col] = graph.position(id);
                let on_row_edge = row == 0 || row == rows - 1;
                let on_col_edge = col == 0 || col == cols - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 2,
                    (true, false) | (false, true) => 3,
                    (false, false) => 4,
                };
                assert_eq!(
                    graph.neighbors(id).len(),
                    expected,
                    "node ({row}, {col}) in {rows}x{cols}"
                );
            }
        }
    }

    // Tests adjacency symmetry for every pair
    // Verified by adding only the up edge
    #[test]
    fn test_grid_adjacency_symmetric() {
        let graph = fully_observed(4, 5);
        for id in graph.nodes() {
            for &neighbor in graph.neighbors(id) {
                assert!(
                    graph.neighbors(neighbor).contains(&id),
                    "{neighbor} lists no edge back to {id}"
                );
            }
        }
        // 4x5 grid: 4*(5-1) horizontal + (4-1)*5 vertical edges
        assert_eq!(graph.edges().len(), 31);
    }

    // Tests neighbours are listed in ascending id order
    // Verified by pushing the down neighbour first
    #[test]
    fn test_grid_neighbors_sorted() {
        let graph = fully_observed(3, 3);
        assert_eq!(graph.neighbors(4), &[1, 3, 5, 7]);
        assert_eq!(graph.neighbors(0), &[1, 3]);
        assert_eq!(graph.neighbors(8), &[5, 7]);
    }

    // Tests degenerate single row and single cell grids
    // Verified by wrapping column neighbours across rows
    #[test]
    fn test_grid_degenerate_shapes() {
        let strip = fully_observed(1, 4);
        assert_eq!(strip.neighbors(0), &[1]);
        assert_eq!(strip.neighbors(3), &[2]);
        assert_eq!(strip.neighbors(1), &[0, 2]);

        let single = fully_observed(1, 1);
        assert!(single.neighbors(0).is_empty());
        assert!(single.edges().is_empty());
    }

    // Tests unobserved enumeration is row-major and values are wired correctly
    // Verified by storing the value of unobserved cells
    #[test]
    fn test_grid_unobserved_order_and_values() {
        let intensities = array![[10_i32, -5, 30], [40, 999, 60]];
        let mask = array![[true, false, true], [true, false, true]];
        let graph = GridGraph::from_matrix(intensities.view(), mask.view()).unwrap();

        assert_eq!(graph.unobserved().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(graph.unobserved_count(), 2);
        assert!(graph.is_observed(0));
        assert!(!graph.is_observed(1));
        assert_eq!(graph.value(0), Some(10));
        assert_eq!(graph.value(5), Some(60));
        assert_eq!(graph.value(1), None);
        assert_eq!(graph.value(4), None);
        assert_eq!(graph.id_at(1, 2), Some(5));
        assert_eq!(graph.id_at(2, 0), None);
    }

    // Tests decoded values are only written to unobserved nodes
    // Verified by removing the observed guard
    #[test]
    fn test_grid_set_decoded() {
        let intensities = array![[1_u8, 2], [3, 4]];
        let mask = array![[true, false], [true, true]];
        let mut graph = GridGraph::from_matrix(intensities.view(), mask.view()).unwrap();

        assert!(!graph.set_decoded(0, 200));
        assert_eq!(graph.value(0), Some(1));

        assert!(graph.set_decoded(1, 77));
        assert_eq!(graph.to_matrix(), array![[1_u8, 77], [3, 4]]);
    }

    // Tests mismatched shapes are rejected
    // Verified by comparing only row counts
    #[test]
    fn test_grid_invalid_shape() {
        let intensities = Array2::<u8>::zeros((3, 4));
        let mask = Array2::from_elem((3, 5), true);
        let result = GridGraph::from_matrix(intensities.view(), mask.view());

        match result {
            Err(InferenceError::InvalidShape { intensities, mask }) => {
                assert_eq!(intensities, (3, 4));
                assert_eq!(mask, (3, 5));
            }
            other => unreachable!("expected InvalidShape, got {other:?}"),
        }
    }

    // Tests empty grids are rejected
    // Verified by checking only the row count
    #[test]
    fn test_grid_empty() {
        let intensities = Array2::<u8>::zeros((4, 0));
        let mask = Array2::from_elem((4, 0), true);
        let result = GridGraph::from_matrix(intensities.view(), mask.view());
        assert!(matches!(
            result,
            Err(InferenceError::EmptyGrid { dimensions: (4, 0) })
        ));
    }

    // Tests out-of-range observed values are rejected and unobserved ones ignored
    // Verified by validating every cell regardless of mask
    #[test]
    fn test_grid_out_of_range_intensity() {
        let intensities = array![[0_i32, 256], [-1, 255]];
        let mask = array![[true, true], [false, true]];
        let result = GridGraph::from_matrix(intensities.view(), mask.view());

        match result {
            Err(InferenceError::OutOfRangeIntensity { position, value }) => {
                assert_eq!(position, [0, 1]);
                assert_eq!(value, "256");
            }
            other => unreachable!("expected OutOfRangeIntensity, got {other:?}"),
        }

        let negative_observed = array![[-3_i64]];
        let mask = array![[true]];
        assert!(GridGraph::from_matrix(negative_observed.view(), mask.view()).is_err());
    }

    // Tests inboxes start empty
    // Verified by seeding placeholders at construction
    #[test]
    fn test_grid_inbox_starts_empty() {
        let graph = fully_observed(2, 2);
        for id in graph.nodes() {
            assert!(graph.inbox(id).is_some_and(|inbox| inbox.is_empty()));
        }
        assert!(graph.inbox(4).is_none());
    }
}
