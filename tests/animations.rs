mod tests {
    use embassy_time::Duration;
    use spoke_light_composer::animation::{
        Animation, AnimationId, LightAllAnimation, OrbitAnimation, PendulumAnimation,
        RainbowRingsAnimation, SpinSingleAnimation, catalog,
    };
    use spoke_light_composer::{
        Hsv, RING_COUNT, Rgb, SPOKE_COUNT, WheelSink, display_wired, hsv2rgb,
    };

    fn hue_color(hue: u8) -> Rgb {
        hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        })
    }

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_light_all_advances_hue_by_one() {
        let mut animation = LightAllAnimation::new();
        let mut sink = WheelSink::new();

        let first = animation.render(&mut sink);
        assert_eq!(first.name, "light_all");
        assert_eq!(first.delay, Duration::from_millis(30));
        for ring in 0..RING_COUNT {
            for spoke in 0..SPOKE_COUNT {
                if display_wired(ring, spoke) {
                    assert_eq!(sink.get(ring, spoke), hue_color(0));
                }
            }
        }

        animation.render(&mut sink);
        for ring in 0..RING_COUNT {
            for spoke in 0..SPOKE_COUNT {
                if display_wired(ring, spoke) {
                    assert_eq!(sink.get(ring, spoke), hue_color(1));
                }
            }
        }
    }

    #[test]
    fn test_orbit_first_frame_single_head() {
        let mut animation = OrbitAnimation::new();
        let mut sink = WheelSink::new();

        let result = animation.render(&mut sink);
        assert_eq!(result.name, "orbit");
        assert_eq!(result.delay, Duration::from_millis(40));

        // The initial position of -13 truncates to ring 0; everything
        // else starts zeroed and fades to black.
        assert_eq!(sink.get(0, 0), hue_color(0));
        for ring in 0..RING_COUNT {
            for spoke in 0..SPOKE_COUNT {
                if (ring, spoke) != (0, 0) {
                    assert_eq!(sink.get(ring, spoke), BLACK, "({ring}, {spoke})");
                }
            }
        }
    }

    #[test]
    fn test_orbit_head_leaves_half_bright_highlight() {
        let mut animation = OrbitAnimation::new();
        let mut sink = WheelSink::new();

        animation.render(&mut sink);
        animation.render(&mut sink);

        // Second frame: the head redraws (0, 0) at full brightness after
        // the 255 -> 128 special-case fade, now at hue 1
        assert_eq!(sink.get(0, 0), hue_color(1));
    }

    #[test]
    fn test_spin_single_steps_two_spokes() {
        let mut animation = SpinSingleAnimation::new();
        let mut sink = WheelSink::new();

        animation.render(&mut sink);
        for ring in 0..RING_COUNT {
            assert_eq!(sink.get(ring, 0), hue_color(0));
        }

        sink.clear();
        animation.render(&mut sink);
        for ring in 0..RING_COUNT {
            assert_eq!(sink.get(ring, 2), hue_color(1));
            assert_eq!(sink.get(ring, 0), BLACK);
        }
    }

    #[test]
    fn test_pendulum_initial_column() {
        let mut animation = PendulumAnimation::new();
        let mut sink = WheelSink::new();

        let result = animation.render(&mut sink);
        assert_eq!(result.name, "pendulum");

        // 37 / 16 truncates to spoke 2, lit across every ring
        for ring in 0..RING_COUNT {
            assert_eq!(sink.get(ring, 2), hue_color(0), "ring = {ring}");
        }
    }

    #[test]
    fn test_pendulum_stays_on_grid_long_run() {
        // The acceleration only reverses at the upper bound; make sure
        // the accumulated deceleration still turns the swing around and
        // the column keeps visiting the grid.
        let mut animation = PendulumAnimation::new();
        let mut sink = WheelSink::new();
        let mut lit_frames = 0;
        for _ in 0..2000 {
            sink.clear();
            animation.render(&mut sink);
            let lit = (0..SPOKE_COUNT).any(|spoke| sink.get(4, spoke) != BLACK);
            if lit {
                lit_frames += 1;
            }
        }
        assert!(lit_frames > 1000);
    }

    #[test]
    fn test_rainbow_rings_fades_first_ring_up() {
        let mut animation = RainbowRingsAnimation::new();
        let mut sink = WheelSink::new();

        let result = animation.render(&mut sink);
        assert_eq!(result.name, "rainbow_rings");
        assert_eq!(result.delay, Duration::from_millis(25));

        // First frame: innermost ring at red, value 40, rest dark
        let dim_red = hsv2rgb(Hsv {
            hue: 0,
            sat: 255,
            val: 40,
        });
        assert_eq!(sink.get(0, 0), dim_red);
        assert_eq!(sink.get(1, 0), BLACK);

        animation.render(&mut sink);
        let brighter_red = hsv2rgb(Hsv {
            hue: 0,
            sat: 255,
            val: 60,
        });
        assert_eq!(sink.get(0, 0), brighter_red);
    }

    #[test]
    fn test_rainbow_rings_phase_flip_and_palette_rotation() {
        let mut animation = RainbowRingsAnimation::new();
        let mut sink = WheelSink::new();

        // Fade-in pass: ring 0 climbs 40..=240 in 11 frames, rings 1-4
        // each climb 0..=240 in 13, so the pass spans 63 frames
        for _ in 0..63 {
            sink.clear();
            animation.render(&mut sink);
        }

        // The next frame is the first of the fade-out pass: ring 0 dims
        // from value 250 while the outer rings hold their palette hues
        // at full value
        sink.clear();
        animation.render(&mut sink);
        let dimming_red = hsv2rgb(Hsv {
            hue: 0,
            sat: 255,
            val: 250,
        });
        assert_eq!(sink.get(0, 0), dimming_red);
        assert_eq!(sink.get(1, 0), hue_color(41));
        assert_eq!(sink.get(4, 0), hue_color(216));

        // Each ring takes 13 frames to fade out; after the remaining 64
        // the cycle restarts one palette step further along
        for _ in 0..64 {
            sink.clear();
            animation.render(&mut sink);
        }
        sink.clear();
        animation.render(&mut sink); // new fade-in, value 0
        sink.clear();
        animation.render(&mut sink);
        let rising_yellow = hsv2rgb(Hsv {
            hue: 41,
            sat: 255,
            val: 20,
        });
        assert_eq!(sink.get(0, 0), rising_yellow);
        assert_eq!(sink.get(1, 0), BLACK);
    }

    #[test]
    fn test_catalog_order_and_names() {
        let slots = catalog();
        let expected = [
            "outer_hue",
            "outer_ripple",
            "pendulum",
            "orbit",
            "triad_orbits",
            "blurred_spiral",
            "blurred_spiral_hues",
            "rainbow_rings",
            "comets_short",
            "comets",
            "outward_ripple_hue",
            "single_spiral",
            "outward_ripple",
            "spiral",
            "light_all",
            "spin_single",
            "fast_outward_hue",
            "fast_inward_hue",
        ];
        assert_eq!(slots.len(), expected.len());
        for (slot, name) in slots.iter().zip(expected) {
            assert_eq!(slot.id().as_str(), name);
        }
    }

    #[test]
    fn test_animation_id_round_trip() {
        for raw in 0..18 {
            let id = AnimationId::from_raw(raw).unwrap();
            assert_eq!(id as u8, raw);
        }
        assert!(AnimationId::from_raw(18).is_none());
    }

    #[test]
    fn test_every_animation_is_deterministic() {
        // Two fresh catalogs fed the same call sequence must agree on
        // every frame and every reported delay
        let mut first = catalog();
        let mut second = catalog();
        for (a, b) in first.iter_mut().zip(second.iter_mut()) {
            let mut sink_a = WheelSink::new();
            let mut sink_b = WheelSink::new();
            for call in 0..50 {
                sink_a.clear();
                sink_b.clear();
                let result_a = a.render(&mut sink_a);
                let result_b = b.render(&mut sink_b);
                assert_eq!(result_a, result_b, "{} call {call}", result_a.name);
                assert_eq!(
                    sink_a.frame(),
                    sink_b.frame(),
                    "{} call {call}",
                    result_a.name
                );
            }
        }
    }

    #[test]
    fn test_names_match_render_results() {
        let mut slots = catalog();
        let mut sink = WheelSink::new();
        for slot in &mut slots {
            let id_name = slot.id().as_str();
            let result = slot.render(&mut sink);
            assert_eq!(result.name, id_name);
        }
    }
}
