#![no_std]

pub mod animation;
pub mod channel;
pub mod color;
pub mod math8;
pub mod scheduler;
pub mod sink;
pub mod topology;

pub use animation::{Animation, AnimationId, AnimationResult, AnimationSlot};
pub use channel::{ControlChannel, ControlEvent, ControlReceiver, ControlSender};
pub use scheduler::{Scheduler, TICK_PERIOD, TickOutcome};
pub use sink::{Frame, WheelSink};
pub use topology::{
    RING_COUNT, SPOKE_COUNT, STRIP_LED_COUNT, display_wired, pack_frame,
    ring_spoke_to_index,
};

pub use color::{Hsv, Rgb, hsv2rgb};
pub use math8::sin8;
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to push frames to real hardware: flatten the
/// logical frame with [`pack_frame`] and hand the strip colors over.
/// The scheduler is generic over nothing - any driver can poll
/// [`Scheduler::frame`] and write at its own pace.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
