//! Tests for the truncated linear pairwise potential

#[cfg(test)]
mod tests {
    use mrf_inpaint::math::potential::{PairwisePotential, labels};

    fn expected(a: u8, b: u8, capacity: f64) -> f64 {
        -f64::from(a.abs_diff(b)).min(capacity)
    }

    // Tests symmetry and bounds over the whole label domain
    // Verified by returning the unclipped difference
    #[test]
    fn test_log_compatibility_symmetric_and_bounded() {
        let potential = PairwisePotential::new(50.0);

        for a in labels() {
            for b in labels() {
                let forward = potential.log_compatibility(a, b);
                let backward = potential.log_compatibility(b, a);
                assert!((forward - backward).abs() < f64::EPSILON);
                assert!(forward <= 0.0, "potential must never be positive");
                assert!(forward >= -50.0, "potential must be clipped at capacity");
            }
        }
    }

    // Tests exact formula for several capacities including zero and large values
    // Verified by swapping min for max
    #[test]
    fn test_log_compatibility_formula() {
        for capacity in [0.0, 1.0, 50.0, 128.0, 1_000.0] {
            let potential = PairwisePotential::new(capacity);
            for (a, b) in [(0, 0), (0, 255), (255, 0), (100, 149), (100, 151), (7, 3)] {
                let value = potential.log_compatibility(a, b);
                assert!(
                    (value - expected(a, b, capacity)).abs() < f64::EPSILON,
                    "capacity {capacity}, ({a}, {b}) gave {value}"
                );
            }
        }
    }

    // Tests monotonic non-increase in distance
    // Verified by clipping at the wrong end
    #[test]
    fn test_log_compatibility_monotone_in_distance() {
        let potential = PairwisePotential::new(50.0);
        let mut previous = potential.log_compatibility(100, 100);
        for other in 101..=255 {
            let current = potential.log_compatibility(100, other);
            assert!(current <= previous);
            previous = current;
        }
        assert!((previous + 50.0).abs() < f64::EPSILON);
    }

    // Tests message from an observed neighbour is the potential row
    // Verified by evaluating the potential against the label instead of the value
    #[test]
    fn test_message_from_observed() {
        let potential = PairwisePotential::default();
        let message = potential.message_from_observed(100);

        assert_eq!(message.len(), 256);
        for (label, &entry) in message.iter().enumerate() {
            let expected_entry = expected(label as u8, 100, 50.0);
            assert!((entry - expected_entry).abs() < f64::EPSILON);
        }
        assert!((potential.capacity() - 50.0).abs() < f64::EPSILON);
    }

    // Tests the label iterator covers 0..=255 in order
    // Verified by stopping at 254
    #[test]
    fn test_labels_cover_domain() {
        let all: Vec<u8> = labels().collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all.first(), Some(&0));
        assert_eq!(all.last(), Some(&255));
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
