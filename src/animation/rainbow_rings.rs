//! Two-phase rainbow ring fill
//!
//! Rings fill inward-out from a five-hue palette, each fading up in
//! fixed steps before the next one starts; once all five are lit the
//! machine flips into a fade-out pass, and after a full cycle the
//! starting palette index rotates.

use super::{ANIMATION_NAME_RAINBOW_RINGS, Animation, AnimationResult};
use crate::color::{Hsv, Rgb, hsv2rgb, hue_color};
use crate::sink::WheelSink;
use crate::topology::{RING_COUNT, SPOKE_COUNT};

// red yellow green aqua-blue purple
const RAINBOW_HUES: [u8; 5] = [0, 41, 80, 145, 216];
const CHANGE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    FadingIn,
    FadingOut,
}

#[derive(Debug, Clone)]
pub struct RainbowRingsAnimation {
    start_hue_index: usize,
    current_ring: usize,
    value: u8,
    phase: Phase,
}

impl Default for RainbowRingsAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowRingsAnimation {
    pub const fn new() -> Self {
        Self {
            start_hue_index: 0,
            current_ring: 0,
            value: 40,
            phase: Phase::FadingIn,
        }
    }

    fn palette_hue(&self, ring: usize) -> u8 {
        RAINBOW_HUES[(self.start_hue_index + ring) % RAINBOW_HUES.len()]
    }

    /// Paint one full ring. The outer ring also writes the spoke range
    /// [SPOKE_COUNT, 2*SPOKE_COUNT) - inert since the sink drops it, but
    /// kept as literal device behavior in case the bounds check is ever
    /// loosened.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn fill_ring(sink: &mut WheelSink, ring: usize, color: Rgb) {
        for spoke in 0..SPOKE_COUNT as i32 {
            sink.set(ring as i32, spoke, color);
        }
        if ring == RING_COUNT - 1 {
            for spoke in SPOKE_COUNT as i32..2 * SPOKE_COUNT as i32 {
                sink.set(ring as i32, spoke, color);
            }
        }
    }
}

impl Animation for RainbowRingsAnimation {
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        match self.phase {
            Phase::FadingIn => {
                // Previous rings at full value
                for ring in 0..self.current_ring {
                    Self::fill_ring(sink, ring, hue_color(self.palette_hue(ring)));
                }
                // Current ring fades up
                let color = hsv2rgb(Hsv {
                    hue: self.palette_hue(self.current_ring),
                    sat: 255,
                    val: self.value,
                });
                Self::fill_ring(sink, self.current_ring, color);

                if self.value < 255 - CHANGE {
                    self.value += CHANGE;
                } else {
                    self.value = 0;
                    self.current_ring += 1;
                    if self.current_ring >= RING_COUNT {
                        self.current_ring = 0;
                        self.phase = Phase::FadingOut;
                        self.value = 250;
                    }
                }
            }
            Phase::FadingOut => {
                // Current ring fades down
                let color = hsv2rgb(Hsv {
                    hue: self.palette_hue(self.current_ring),
                    sat: 255,
                    val: self.value,
                });
                Self::fill_ring(sink, self.current_ring, color);
                // Outer rings still at full value
                for ring in (self.current_ring + 1..RING_COUNT).rev() {
                    Self::fill_ring(sink, ring, hue_color(self.palette_hue(ring)));
                }

                if self.value > CHANGE {
                    self.value -= CHANGE;
                } else {
                    self.value = 255;
                    self.current_ring += 1;
                    if self.current_ring >= RING_COUNT {
                        self.current_ring = 0;
                        self.phase = Phase::FadingIn;
                        self.value = 0;
                        self.start_hue_index =
                            (self.start_hue_index + 1) % RAINBOW_HUES.len();
                    }
                }
            }
        }

        AnimationResult::new(ANIMATION_NAME_RAINBOW_RINGS, 25)
    }
}
