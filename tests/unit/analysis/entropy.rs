//! Tests for quantization, luma and Shannon entropy helpers

#[cfg(test)]
mod tests {
    use cellstat::CellError;
    use cellstat::analysis::entropy::{
        bucket, entropy_of, histogram, luminance, quantize, shannon_entropy, validate_sensitivity,
    };

    // Tests sensitivity must be finite and strictly positive
    // Verified by accepting zero
    #[test]
    fn test_validate_sensitivity() {
        assert!(validate_sensitivity(0.5).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_sensitivity(bad),
                Err(CellError::InvalidArgument { parameter: "color_sensitivity", .. })
            ));
        }
    }

    // Tests buckets agree with rounding to the nearest multiple
    // Verified by keying buckets on the truncated quotient
    #[test]
    fn test_bucket_matches_quantize() {
        assert!((quantize(12.0, 5.0) - 10.0).abs() < f64::EPSILON);
        assert!((quantize(13.0, 5.0) - 15.0).abs() < f64::EPSILON);
        assert_eq!(bucket(12.0, 5.0), bucket(10.0, 5.0));
        assert_ne!(bucket(12.0, 5.0), bucket(13.0, 5.0));
        assert_eq!(bucket(13.0, 5.0), 15.0_f64.to_bits());
        assert_eq!(bucket(-0.0, 1.0), bucket(0.0, 1.0));
    }

    // Tests tiny steps keep neighbouring values apart instead of saturating
    // Verified by casting the rounded quotient to i64
    #[test]
    fn test_tiny_sensitivity_keeps_values_apart() {
        let sensitivity = validate_sensitivity(1e-18).unwrap();

        assert_ne!(bucket(254.0, sensitivity), bucket(255.0, sensitivity));
        assert!(
            (entropy_of([254.0, 255.0].map(|v| bucket(v, sensitivity))) - 1.0).abs() < 1e-12
        );
    }

    // Tests steps too small to quantize the 8-bit range are rejected
    // Verified by dropping the overflow check from validate_sensitivity
    #[test]
    fn test_overflowing_sensitivity_rejected() {
        assert!(matches!(
            validate_sensitivity(1e-307),
            Err(CellError::InvalidArgument { parameter: "color_sensitivity", .. })
        ));
        assert!(validate_sensitivity(1e-300).is_ok());
    }

    // Tests BT.601 luma weights
    // Verified by swapping the red and blue weights
    #[test]
    fn test_luminance_weights() {
        assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-9);
        assert!((luminance(255, 0, 0) - 76.245).abs() < 1e-9);
        assert!((luminance(0, 0, 255) - 29.07).abs() < 1e-9);
        assert!(luminance(0, 0, 0).abs() < f64::EPSILON);
    }

    // Tests histogram counts duplicates
    #[test]
    fn test_histogram_counts() {
        let counts = histogram(["a", "b", "a", "a"]);

        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    // Tests known entropy values including the empty and certain distributions
    // Verified by using the natural logarithm
    #[test]
    fn test_shannon_entropy_known_values() {
        assert!(shannon_entropy([], 0).abs() < f64::EPSILON);
        assert!(shannon_entropy([8], 8).abs() < f64::EPSILON);
        assert!((shannon_entropy([1, 1], 2) - 1.0).abs() < 1e-12);
        assert!((shannon_entropy([1, 1, 1, 1], 4) - 2.0).abs() < 1e-12);
        assert!((shannon_entropy([2, 1, 1], 4) - 1.5).abs() < 1e-12);
    }

    // Tests a single certain bucket is positive zero rather than negative zero
    #[test]
    fn test_single_bucket_is_positive_zero() {
        let entropy = entropy_of([7, 7, 7]);

        assert!(entropy.abs() < f64::EPSILON);
        assert!(entropy.is_sign_positive());
    }

    // Tests entropy_of counts distinct keys
    #[test]
    fn test_entropy_of_distinct_keys() {
        assert!((entropy_of([(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)]) - 2.0).abs() < 1e-12);
        assert!(entropy_of(Vec::<i64>::new()).abs() < f64::EPSILON);
    }
}
