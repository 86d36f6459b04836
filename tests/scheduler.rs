mod tests {
    use embassy_time::Duration;
    use spoke_light_composer::{
        ControlChannel, ControlEvent, Rgb, Scheduler, TICK_PERIOD,
    };

    const TICK: Duration = TICK_PERIOD;

    #[test]
    fn test_first_tick_renders_first_animation() {
        let channel = ControlChannel::<8>::new();
        let mut scheduler = Scheduler::new(channel.receiver());

        let outcome = scheduler.tick(TICK);
        assert_eq!(outcome.rendered, Some("outer_hue"));
        assert!(!outcome.quit);
        assert_eq!(scheduler.current_name(), "outer_hue");
    }

    #[test]
    fn test_budget_paces_invocations() {
        let channel = ControlChannel::<8>::new();
        let mut scheduler = Scheduler::new(channel.receiver());

        // outer_hue reports 25 ms; at a 16 ms tick the budget survives
        // exactly one tick before the next render
        assert!(scheduler.tick(TICK).rendered.is_some());
        assert!(scheduler.tick(TICK).rendered.is_none());
        assert!(scheduler.tick(TICK).rendered.is_some());
    }

    #[test]
    fn test_next_switches_and_renders_immediately() {
        let channel = ControlChannel::<8>::new();
        let mut scheduler = Scheduler::new(channel.receiver());
        scheduler.tick(TICK);

        channel.try_send(ControlEvent::Next).unwrap();
        let outcome = scheduler.tick(TICK);
        assert_eq!(outcome.rendered, Some("outer_ripple"));
        assert_eq!(scheduler.current_name(), "outer_ripple");

        // outer_ripple reports 50 ms: three more ticks before it renders
        // again on its own
        assert!(scheduler.tick(TICK).rendered.is_none());
        assert!(scheduler.tick(TICK).rendered.is_none());
        assert!(scheduler.tick(TICK).rendered.is_some());
    }

    #[test]
    fn test_previous_wraps_backward() {
        let channel = ControlChannel::<8>::new();
        let mut scheduler = Scheduler::new(channel.receiver());
        scheduler.tick(TICK);

        channel.try_send(ControlEvent::Previous).unwrap();
        let outcome = scheduler.tick(TICK);
        assert_eq!(outcome.rendered, Some("fast_inward_hue"));

        channel.try_send(ControlEvent::Next).unwrap();
        let outcome = scheduler.tick(TICK);
        assert_eq!(outcome.rendered, Some("outer_hue"));
    }

    #[test]
    fn test_quit_aborts_the_tick() {
        let channel = ControlChannel::<8>::new();
        let mut scheduler = Scheduler::new(channel.receiver());

        // Quit stops everything on the spot: no render, and events
        // queued behind it stay unprocessed
        channel.try_send(ControlEvent::Quit).unwrap();
        channel.try_send(ControlEvent::Next).unwrap();
        let outcome = scheduler.tick(TICK);
        assert!(outcome.quit);
        assert!(outcome.rendered.is_none());
        assert_eq!(scheduler.current_name(), "outer_hue");
    }

    #[test]
    fn test_settle_leaves_clean_frame() {
        let channel = ControlChannel::<8>::new();
        let mut scheduler = Scheduler::new(channel.receiver());
        scheduler.settle();

        let black = Rgb { r: 0, g: 0, b: 0 };
        for row in scheduler.frame() {
            for cell in row {
                assert_eq!(*cell, black);
            }
        }
        // And the first real tick still renders immediately
        assert!(scheduler.tick(TICK).rendered.is_some());
    }
}
