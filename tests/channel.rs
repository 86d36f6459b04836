mod tests {
    use spoke_light_composer::{ControlChannel, ControlEvent};

    #[test]
    fn test_events_arrive_in_order() {
        let channel = ControlChannel::<4>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.try_send(ControlEvent::Next).unwrap();
        sender.try_send(ControlEvent::Previous).unwrap();
        sender.try_send(ControlEvent::Quit).unwrap();

        assert_eq!(receiver.try_receive(), Ok(ControlEvent::Next));
        assert_eq!(receiver.try_receive(), Ok(ControlEvent::Previous));
        assert_eq!(receiver.try_receive(), Ok(ControlEvent::Quit));
        assert!(receiver.try_receive().is_err());
    }

    #[test]
    fn test_full_channel_rejects_send() {
        let channel = ControlChannel::<2>::new();

        channel.try_send(ControlEvent::Next).unwrap();
        channel.try_send(ControlEvent::Next).unwrap();
        let err = channel.try_send(ControlEvent::Quit).unwrap_err();
        assert_eq!(err.0, ControlEvent::Quit);

        // Draining one slot makes room again
        channel.try_receive().unwrap();
        channel.try_send(ControlEvent::Quit).unwrap();
    }
}
