//! Whole-grid and outer-ring hue fills
//!
//! The simplest animations in the catalog: every cell (or a single spoke,
//! or the outer ring) painted from one rotating hue counter.

use super::{
    ANIMATION_NAME_FAST_INWARD_HUE, ANIMATION_NAME_FAST_OUTWARD_HUE,
    ANIMATION_NAME_LIGHT_ALL, ANIMATION_NAME_OUTER_HUE, ANIMATION_NAME_SPIN_SINGLE,
    Animation, AnimationResult,
};
use crate::sink::WheelSink;
use crate::topology::{RING_COUNT, SPOKE_COUNT};

/// Uniform rotating hue across all cells.
#[derive(Debug, Clone, Default)]
pub struct LightAllAnimation {
    hue: u8,
}

impl LightAllAnimation {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }
}

impl Animation for LightAllAnimation {
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for ring in 0..RING_COUNT as i32 {
            for spoke in 0..SPOKE_COUNT as i32 {
                sink.set_hue(ring, spoke, self.hue);
            }
        }
        self.hue = self.hue.wrapping_add(1);
        AnimationResult::new(ANIMATION_NAME_LIGHT_ALL, 30)
    }
}

/// A single spoke lit across all rings, stepping by two positions per
/// frame.
#[derive(Debug, Clone, Default)]
pub struct SpinSingleAnimation {
    hue: u8,
    spoke: i32,
}

impl SpinSingleAnimation {
    pub const fn new() -> Self {
        Self { hue: 0, spoke: 0 }
    }
}

impl Animation for SpinSingleAnimation {
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for ring in 0..RING_COUNT as i32 {
            sink.set_hue(ring, self.spoke, self.hue);
        }
        self.hue = self.hue.wrapping_add(1);
        self.spoke = (self.spoke + 2) % SPOKE_COUNT as i32;
        AnimationResult::new(ANIMATION_NAME_SPIN_SINGLE, 25)
    }
}

/// Which way the ring gradient appears to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    Outward,
    Inward,
}

/// Hue gradient by ring offset: each ring shifted by 20 hue units from
/// its neighbour, whole pattern advancing by 3 per frame.
#[derive(Debug, Clone)]
pub struct HueSweepAnimation {
    hue: u8,
    direction: SweepDirection,
}

impl HueSweepAnimation {
    pub const fn new(direction: SweepDirection) -> Self {
        Self { hue: 0, direction }
    }
}

impl Animation for HueSweepAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for ring in 0..RING_COUNT as i32 {
            let offset = (ring * 20) as u8;
            let hue = match self.direction {
                SweepDirection::Outward => self.hue.wrapping_sub(offset),
                SweepDirection::Inward => self.hue.wrapping_add(offset),
            };
            for spoke in 0..SPOKE_COUNT as i32 {
                sink.set_hue(ring, spoke, hue);
            }
        }
        self.hue = self.hue.wrapping_add(3);
        let name = match self.direction {
            SweepDirection::Outward => ANIMATION_NAME_FAST_OUTWARD_HUE,
            SweepDirection::Inward => ANIMATION_NAME_FAST_INWARD_HUE,
        };
        AnimationResult::new(name, 25)
    }
}

/// Hue sweep around the outer ring only, offset by spoke position.
#[derive(Debug, Clone, Default)]
pub struct OuterHueAnimation {
    hue: u8,
}

impl OuterHueAnimation {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }
}

impl Animation for OuterHueAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for spoke in 0..SPOKE_COUNT as i32 {
            // The offset is spoke * 255 / 18, numerator first
            let offset = (spoke * 255 / SPOKE_COUNT as i32) as u8;
            sink.set_hue(
                RING_COUNT as i32 - 1,
                spoke,
                self.hue.wrapping_add(offset),
            );
        }
        self.hue = self.hue.wrapping_sub(10);
        AnimationResult::new(ANIMATION_NAME_OUTER_HUE, 25)
    }
}
