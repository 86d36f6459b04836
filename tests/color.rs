mod tests {
    use spoke_light_composer::{Hsv, Rgb, hsv2rgb};

    fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    fn convert(hue: u8, sat: u8, val: u8) -> Rgb {
        hsv2rgb(Hsv { hue, sat, val })
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for hue in 0u8..=255 {
            assert_eq!(convert(hue, 0, 200), rgb(200, 200, 200), "hue = {hue}");
            assert_eq!(convert(hue, 0, 0), rgb(0, 0, 0), "hue = {hue}");
        }
    }

    #[test]
    fn test_region_starts() {
        // Each region boundary lands on (nearly) one pure channel
        assert_eq!(convert(0, 255, 255), rgb(255, 0, 0));
        assert_eq!(convert(43, 255, 255), rgb(254, 255, 0));
        assert_eq!(convert(86, 255, 255), rgb(0, 255, 0));
        assert_eq!(convert(129, 255, 255), rgb(0, 254, 255));
        assert_eq!(convert(172, 255, 255), rgb(0, 0, 255));
        assert_eq!(convert(215, 255, 255), rgb(255, 0, 254));
    }

    #[test]
    fn test_hue_wrap_top() {
        // 255 is still region 5, remainder 240
        assert_eq!(convert(255, 255, 255), rgb(255, 0, 15));
    }

    #[test]
    fn test_partial_saturation_and_value() {
        assert_eq!(convert(0, 128, 255), rgb(255, 127, 126));
        assert_eq!(convert(0, 255, 128), rgb(128, 0, 0));
    }

    #[test]
    fn test_value_bounds_channels() {
        // No channel ever exceeds the value input
        for hue in 0u8..=255 {
            let color = convert(hue, 255, 200);
            assert!(color.r <= 200 && color.g <= 200 && color.b <= 200, "hue = {hue}");
        }
    }
}
