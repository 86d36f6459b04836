//! Brightness ripples
//!
//! Per-cell values come from [`sin8`] with a ring-dependent phase shift,
//! so brightness waves appear to travel outward; the outer-ring variant
//! runs a fixed-length pulse around the rim instead.

use super::{
    ANIMATION_NAME_OUTER_RIPPLE, ANIMATION_NAME_OUTWARD_RIPPLE,
    ANIMATION_NAME_OUTWARD_RIPPLE_HUE, Animation, AnimationResult,
};
use crate::color::{Hsv, hsv2rgb};
use crate::math8::sin8;
use crate::sink::WheelSink;
use crate::topology::{RING_COUNT, SPOKE_COUNT};

/// Outward-traveling brightness wave, hue either uniform or offset per
/// spoke.
#[derive(Debug, Clone)]
pub struct OutwardRippleAnimation {
    hue: u8,
    ripple: u8,
    per_spoke_hue: bool,
}

impl OutwardRippleAnimation {
    pub const fn new(per_spoke_hue: bool) -> Self {
        Self {
            hue: 0,
            ripple: 0,
            per_spoke_hue,
        }
    }
}

impl Animation for OutwardRippleAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for ring in 0..RING_COUNT as i32 {
            for spoke in 0..SPOKE_COUNT as i32 {
                let mut hue = self.hue.wrapping_add((ring * 15) as u8);
                if self.per_spoke_hue {
                    hue = hue.wrapping_add((spoke * (255 / SPOKE_COUNT as i32)) as u8);
                }
                let val = sin8(self.ripple.wrapping_sub((ring * 30) as u8));
                sink.set(ring, spoke, hsv2rgb(Hsv { hue, sat: 255, val }));
            }
        }
        self.hue = self.hue.wrapping_add(if self.per_spoke_hue { 2 } else { 1 });
        self.ripple = self.ripple.wrapping_add(3);
        let name = if self.per_spoke_hue {
            ANIMATION_NAME_OUTWARD_RIPPLE_HUE
        } else {
            ANIMATION_NAME_OUTWARD_RIPPLE
        };
        AnimationResult::new(name, 25)
    }
}

/// Symmetric brightness envelope of the outer-ring pulse.
const PULSE: [u8; 7] = [255 / 8, 255 / 4, 255 / 2, 255, 255 / 2, 255 / 4, 255 / 8];

/// Traveling pulse of fixed length 7 around the outer ring.
#[derive(Debug, Clone, Default)]
pub struct OuterRippleAnimation {
    hue: u8,
    spoke: i32,
}

impl OuterRippleAnimation {
    pub const fn new() -> Self {
        Self { hue: 0, spoke: 0 }
    }
}

impl Animation for OuterRippleAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for (i, &val) in PULSE.iter().enumerate() {
            let color = hsv2rgb(Hsv {
                hue: self.hue,
                sat: 255,
                val,
            });
            sink.set(
                RING_COUNT as i32 - 1,
                (self.spoke + i as i32) % SPOKE_COUNT as i32,
                color,
            );
        }
        self.spoke = (self.spoke + 1) % SPOKE_COUNT as i32;
        self.hue = self.hue.wrapping_add(2);
        AnimationResult::new(ANIMATION_NAME_OUTER_RIPPLE, 50)
    }
}
