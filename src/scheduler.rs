//! Animation scheduling and selection
//!
//! The scheduler is driven by an external fixed-rate clock (the preview
//! runs it at 60 Hz): each tick drains pending control events and burns
//! down the delay budget of the frame currently on display. When the
//! budget runs out, the current animation renders the next frame and its
//! reported delay becomes the new budget. Navigation events re-render
//! immediately instead of waiting out the budget.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{AnimationId, AnimationSlot, CATALOG_LEN, catalog};
use crate::channel::{ControlEvent, ControlReceiver};
use crate::sink::{Frame, WheelSink};

/// Target rate of the driving clock (60 Hz).
pub const TICK_RATE_HZ: u32 = 60;

/// Period of one scheduler tick at the target rate.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / TICK_RATE_HZ as u64);

/// Warm-up invocations per animation in [`Scheduler::settle`].
const SETTLE_CALLS: usize = 20;

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickOutcome {
    /// Name of the animation that rendered during this tick, if any.
    /// Forward it to the UI on every invocation.
    pub rendered: Option<&'static str>,
    /// A quit event was received; the caller should tear down.
    pub quit: bool,
}

/// Delay-budget scheduler over the animation catalog.
pub struct Scheduler<'a, const CONTROL_CHANNEL_SIZE: usize> {
    events: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>,
    slots: [AnimationSlot; CATALOG_LEN],
    index: usize,
    budget_ms: i64,
    sink: WheelSink,
}

impl<'a, const CONTROL_CHANNEL_SIZE: usize> Scheduler<'a, CONTROL_CHANNEL_SIZE> {
    /// Create a scheduler over the full catalog, starting at entry 0.
    ///
    /// The budget starts drained, so the first tick renders immediately.
    pub fn new(events: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>) -> Self {
        Self {
            events,
            slots: catalog(),
            index: 0,
            budget_ms: 0,
            sink: WheelSink::new(),
        }
    }

    /// Invoke every animation a number of times before the loop starts.
    ///
    /// Some animations look bad when first called but then settle down
    /// (tails still growing, balls mid-launch), so each one gets a
    /// warm-up pass.
    pub fn settle(&mut self) {
        for slot in &mut self.slots {
            for _ in 0..SETTLE_CALLS {
                slot.render(&mut self.sink);
            }
        }
        self.sink.clear();
        self.budget_ms = 0;
    }

    /// Advance the scheduler by one clock period.
    ///
    /// A quit event aborts the tick on the spot: nothing further is
    /// drained or rendered, the caller is expected to tear down.
    #[allow(clippy::cast_possible_wrap)]
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        let mut outcome = TickOutcome {
            rendered: None,
            quit: false,
        };

        while let Ok(event) = self.events.try_receive() {
            match event {
                ControlEvent::Next => {
                    self.index = (self.index + 1) % CATALOG_LEN;
                    outcome.rendered = Some(self.invoke());
                }
                ControlEvent::Previous => {
                    self.index = self.index.checked_sub(1).unwrap_or(CATALOG_LEN - 1);
                    outcome.rendered = Some(self.invoke());
                }
                ControlEvent::Quit => {
                    outcome.quit = true;
                    return outcome;
                }
            }
        }

        self.budget_ms -= elapsed.as_millis() as i64;
        if self.budget_ms <= 0 {
            outcome.rendered = Some(self.invoke());
        }

        outcome
    }

    /// Render the current animation and take over its delay as the new
    /// budget. The frame is cleared first; animations only draw the cells
    /// they own.
    #[allow(clippy::cast_possible_wrap)]
    fn invoke(&mut self) -> &'static str {
        self.sink.clear();
        let result = self.slots[self.index].render(&mut self.sink);
        self.budget_ms = result.delay.as_millis() as i64;

        #[cfg(feature = "esp32-log")]
        println!("animation: {}", result.name);

        result.name
    }

    /// Id of the currently selected animation.
    pub const fn current_id(&self) -> AnimationId {
        self.slots[self.index].id()
    }

    /// Name of the currently selected animation.
    pub const fn current_name(&self) -> &'static str {
        self.current_id().as_str()
    }

    /// Last rendered frame.
    pub const fn frame(&self) -> &Frame {
        self.sink.frame()
    }
}
