//! Spiral patterns
//!
//! Diagonal hue offsets over mirrored indices, and a single turning arm.

use super::{ANIMATION_NAME_SINGLE_SPIRAL, ANIMATION_NAME_SPIRAL, Animation, AnimationResult};
use crate::sink::WheelSink;
use crate::topology::{RING_COUNT, SPOKE_COUNT};

/// Diagonal hue spiral: ring and spoke position combine into the hue
/// offset (20 per ring, 10 per spoke), drawn over mirrored indices.
#[derive(Debug, Clone, Default)]
pub struct SpiralAnimation {
    hue: u8,
}

impl SpiralAnimation {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }
}

impl Animation for SpiralAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for ring in 0..RING_COUNT as i32 {
            for spoke in 0..SPOKE_COUNT as i32 {
                let offset = (ring * 20 + spoke * 10) as u8;
                sink.set_hue(
                    RING_COUNT as i32 - 1 - ring,
                    SPOKE_COUNT as i32 - 1 - spoke,
                    self.hue.wrapping_add(offset),
                );
            }
        }
        self.hue = self.hue.wrapping_add(3);
        AnimationResult::new(ANIMATION_NAME_SPIRAL, 25)
    }
}

/// One lit cell per ring, each ring turned two spokes further than the
/// one outside it, the whole arm stepping around the wheel.
#[derive(Debug, Clone, Default)]
pub struct SingleSpiralAnimation {
    spoke: i32,
    hue: u8,
}

impl SingleSpiralAnimation {
    pub const fn new() -> Self {
        Self { spoke: 0, hue: 0 }
    }
}

impl Animation for SingleSpiralAnimation {
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for ring in 0..RING_COUNT as i32 {
            sink.set_hue(
                RING_COUNT as i32 - 1 - ring,
                (self.spoke + ring * 2) % SPOKE_COUNT as i32,
                self.hue,
            );
        }
        self.spoke = (self.spoke + 2) % SPOKE_COUNT as i32;
        self.hue = self.hue.wrapping_add(1);
        AnimationResult::new(ANIMATION_NAME_SINGLE_SPIRAL, 100)
    }
}
