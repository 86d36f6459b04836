//! Comet trails and blurred spiral arms
//!
//! Both families keep a per-spoke memory (tail start positions or hues)
//! and feed one new head per frame in round-robin spoke order. Tails are
//! drawn with fixed fractional brightness divisors and deliberately run
//! past the grid edges - the sink drops those writes.

use super::{
    ANIMATION_NAME_BLURRED_SPIRAL, ANIMATION_NAME_BLURRED_SPIRAL_HUES,
    ANIMATION_NAME_COMETS, ANIMATION_NAME_COMETS_SHORT, Animation, AnimationResult,
};
use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::sink::WheelSink;
use crate::topology::{RING_COUNT, SPOKE_COUNT};

/// Dim a color by `num/den`, dividing first as the device firmware does.
const fn dim(color: Rgb, num: u8, den: u8) -> Rgb {
    Rgb {
        r: color.r / den * num,
        g: color.g / den * num,
        b: color.b / den * num,
    }
}

/// Tail length of the comet animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CometTail {
    /// Six-cell tail with a slow falloff.
    Long,
    /// Three-cell tail.
    Short,
}

/// Moving heads chasing around the wheel, one per spoke, each dragging a
/// radially fading tail. A persistent per-spoke hue memory keeps a tail's
/// color stable while its head hue keeps rotating.
#[derive(Debug, Clone)]
pub struct CometsAnimation {
    tail: CometTail,
    spoke_hue: [u8; SPOKE_COUNT],
    spoke_start: usize,
    hue: u8,
}

impl CometsAnimation {
    pub const fn new(tail: CometTail) -> Self {
        Self {
            tail,
            spoke_hue: [0; SPOKE_COUNT],
            spoke_start: 0,
            hue: 0,
        }
    }
}

impl Animation for CometsAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        let (span, name) = match self.tail {
            CometTail::Long => (RING_COUNT as i32 + 5, ANIMATION_NAME_COMETS),
            CometTail::Short => (RING_COUNT as i32 + 2, ANIMATION_NAME_COMETS_SHORT),
        };

        for offset in 0..span {
            let spoke = (self.spoke_start as i32 + offset) % SPOKE_COUNT as i32;
            let color = hsv2rgb(Hsv {
                hue: self.spoke_hue[spoke as usize],
                sat: 255,
                val: 255,
            });
            let head = RING_COUNT as i32 - offset;
            match self.tail {
                CometTail::Long => {
                    sink.set(head - 1, spoke, dim(color, 1, 4));
                    sink.set(head, spoke, dim(color, 1, 4));
                    sink.set(head + 1, spoke, dim(color, 1, 3));
                    sink.set(head + 2, spoke, dim(color, 1, 2));
                    sink.set(head + 3, spoke, dim(color, 2, 3));
                    sink.set(head + 4, spoke, color);
                }
                CometTail::Short => {
                    sink.set(head - 1, spoke, dim(color, 1, 4));
                    sink.set(head, spoke, dim(color, 1, 2));
                    sink.set(head + 1, spoke, color);
                }
            }
        }

        self.spoke_hue[self.spoke_start] = self.hue;
        self.hue = self.hue.wrapping_add(20);
        self.spoke_start = (self.spoke_start + 1) % SPOKE_COUNT;

        AnimationResult::new(name, 100)
    }
}

/// Brightness profile along a blurred spiral tail.
const TAIL: [u8; 5] = [255 / 4, 255 / 2, 255, 255 / 2, 255 / 4];

/// Radial tails climbing outward on every spoke at once, restarted from
/// below the hub in round-robin order.
#[derive(Debug, Clone)]
pub struct BlurredSpiralAnimation {
    current_spoke: usize,
    current_hue: u8,
    hues: [u8; SPOKE_COUNT],
    starts: [i8; SPOKE_COUNT],
    per_spoke_hues: bool,
}

impl BlurredSpiralAnimation {
    pub const fn new(per_spoke_hues: bool) -> Self {
        Self {
            current_spoke: 0,
            current_hue: 0,
            hues: [0; SPOKE_COUNT],
            starts: [0; SPOKE_COUNT],
            per_spoke_hues,
        }
    }
}

impl Animation for BlurredSpiralAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        for spoke in 0..SPOKE_COUNT {
            let hue = if self.per_spoke_hues {
                self.hues[spoke]
            } else {
                self.current_hue
            };
            for (offset, &val) in TAIL.iter().enumerate() {
                let color = hsv2rgb(Hsv { hue, sat: 255, val });
                // Rely on the checks in the sink to not step out of bounds
                sink.set(
                    i32::from(self.starts[spoke]) + offset as i32,
                    spoke as i32,
                    color,
                );
            }
            self.starts[spoke] += 1;
        }

        self.starts[self.current_spoke] = -(TAIL.len() as i8) + 1;
        if self.per_spoke_hues {
            self.hues[self.current_spoke] = self.current_hue;
        }
        self.current_spoke = (self.current_spoke + 1) % SPOKE_COUNT;
        self.current_hue = self
            .current_hue
            .wrapping_add(if self.per_spoke_hues { 10 } else { 1 });

        let name = if self.per_spoke_hues {
            ANIMATION_NAME_BLURRED_SPIRAL_HUES
        } else {
            ANIMATION_NAME_BLURRED_SPIRAL
        };
        AnimationResult::new(name, 100)
    }
}
