mod tests {
    use spoke_light_composer::sin8;

    #[test]
    fn test_sin8_golden_values() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(16), 177);
        assert_eq!(sin8(32), 218);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_sin8_half_period_antisymmetry() {
        // sin8(t) + sin8(t + 128) == 256 for every phase
        for theta in 0u8..=255 {
            assert_eq!(
                sin8(theta).wrapping_add(sin8(theta.wrapping_add(128))),
                0,
                "theta = {theta}"
            );
        }
    }

    #[test]
    fn test_sin8_quarter_period_monotonic() {
        // Rising through the first quarter
        for theta in 0u8..64 {
            assert!(sin8(theta + 1) >= sin8(theta), "theta = {theta}");
        }
        // Falling through the second and third quarters
        for theta in 64u8..192 {
            assert!(sin8(theta + 1) <= sin8(theta), "theta = {theta}");
        }
        // Rising again through the last quarter
        for theta in 192u8..255 {
            assert!(sin8(theta.wrapping_add(1)) >= sin8(theta), "theta = {theta}");
        }
    }

    #[test]
    fn test_sin8_range_midline() {
        for theta in 0u8..=255 {
            let value = sin8(theta);
            assert!((1..=255).contains(&value), "theta = {theta}");
        }
        // The midline sits at 128
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(128), 128);
    }
}
