mod tests {
    use spoke_light_composer::{RING_COUNT, Rgb, SPOKE_COUNT, WheelSink};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_set_wired_cell() {
        let mut sink = WheelSink::new();
        sink.set(0, 0, RED);
        assert_eq!(sink.get(0, 0), RED);
        sink.clear();
        assert_eq!(sink.get(0, 0), BLACK);
    }

    #[test]
    fn test_out_of_grid_is_noop() {
        let mut sink = WheelSink::new();
        sink.set(-1, 0, RED);
        sink.set(RING_COUNT as i32, 0, RED);
        sink.set(0, -1, RED);
        sink.set(0, SPOKE_COUNT as i32, RED);
        sink.set(i32::MIN, i32::MAX, RED);
        assert_eq!(*sink.frame(), *WheelSink::new().frame());
    }

    #[test]
    fn test_unwired_cells_are_noop() {
        let mut sink = WheelSink::new();
        // Inner rings: odd spokes unpopulated
        for ring in 0..RING_COUNT as i32 - 1 {
            for spoke in (1..SPOKE_COUNT as i32).step_by(2) {
                sink.set(ring, spoke, RED);
            }
        }
        // Outer ring: every fourth spoke unpopulated
        for spoke in [3, 7, 11, 15] {
            sink.set(RING_COUNT as i32 - 1, spoke, RED);
        }
        assert_eq!(*sink.frame(), *WheelSink::new().frame());
    }

    #[test]
    fn test_grayscale_setters() {
        let mut sink = WheelSink::new();
        // sin8 peaks at a phase of 64
        sink.set_grayscale(0, 0, 64);
        assert_eq!(sink.get(0, 0), Rgb { r: 255, g: 255, b: 255 });
        sink.set_double_grayscale(0, 2, 32);
        assert_eq!(sink.get(0, 2), Rgb { r: 255, g: 255, b: 255 });
        sink.set_grayscale(0, 4, 0);
        assert_eq!(sink.get(0, 4), Rgb { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_pastel_avoids_extremes() {
        let mut sink = WheelSink::new();
        for v in 0u8..=255 {
            sink.set_pastel(0, 0, v);
            let color = sink.get(0, 0);
            let channels = [color.r, color.g, color.b];
            assert!(channels.iter().any(|&c| c > 0), "v = {v}");
            assert!(channels.iter().any(|&c| c < 255), "v = {v}");
        }
    }

    #[test]
    fn test_fire_ramp() {
        let mut sink = WheelSink::new();
        sink.set_fire(0, 0, 0);
        assert_eq!(sink.get(0, 0), Rgb { r: 0, g: 0, b: 0 });
        sink.set_fire(0, 0, 64);
        assert_eq!(sink.get(0, 0), Rgb { r: 128, g: 0, b: 0 });
        sink.set_fire(0, 0, 128);
        assert_eq!(sink.get(0, 0), Rgb { r: 255, g: 0, b: 0 });
        sink.set_fire(0, 0, 192);
        assert_eq!(sink.get(0, 0), Rgb { r: 255, g: 128, b: 0 });
        sink.set_fire(0, 0, 255);
        assert_eq!(sink.get(0, 0), Rgb { r: 255, g: 254, b: 0 });
    }
}
