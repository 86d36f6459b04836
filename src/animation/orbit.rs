//! Orbiting balls
//!
//! A ring-by-spoke brightness grid decays a little every frame while a
//! ball climbs outward with decreasing integer speed, falls back, and
//! restarts from the hub on another spoke. Cells at full brightness drop
//! to 128 instead of fading, so the head leaves a lingering highlight
//! distinct from the tail.

use super::{ANIMATION_NAME_ORBIT, ANIMATION_NAME_TRIAD_ORBITS, Animation, AnimationResult};
use crate::color::{Hsv, hsv2rgb};
use crate::sink::WheelSink;
use crate::topology::{RING_COUNT, SPOKE_COUNT};

pub(super) type BrightnessGrid = [[u8; SPOKE_COUNT]; RING_COUNT];

const START_SPEED: i32 = 13;
const DIVISOR: i32 = 16;

/// Decay every grid cell by `fade` (255 drops to 128, everything else
/// floors at 0) and draw the whole grid at the given hue.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(super) fn fade_and_draw(
    brightness: &mut BrightnessGrid,
    hue: u8,
    fade: u8,
    sink: &mut WheelSink,
) {
    for (ring, row) in brightness.iter_mut().enumerate() {
        for (spoke, cell) in row.iter_mut().enumerate() {
            if *cell == 255 {
                *cell = 128;
            } else if *cell > fade {
                *cell -= fade;
            } else {
                *cell = 0;
            }
            let color = hsv2rgb(Hsv {
                hue,
                sat: 255,
                val: *cell,
            });
            sink.set(ring as i32, spoke as i32, color);
        }
    }
}

/// Single decelerating ball with a fading trail.
#[derive(Debug, Clone)]
pub struct OrbitAnimation {
    current_spoke: i32,
    position: i32,
    speed: i32,
    hue: u8,
    brightness: BrightnessGrid,
}

impl Default for OrbitAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitAnimation {
    pub const fn new() -> Self {
        Self {
            current_spoke: 0,
            position: -START_SPEED,
            speed: START_SPEED,
            hue: 0,
            brightness: [[0; SPOKE_COUNT]; RING_COUNT],
        }
    }
}

impl Animation for OrbitAnimation {
    #[allow(clippy::cast_sign_loss)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        fade_and_draw(&mut self.brightness, self.hue, 5, sink);

        // The ball should always be maximum brightness. Truncating
        // division, so the initial negative position lands on ring 0.
        let ring = self.position / DIVISOR;
        sink.set_hue(ring, self.current_spoke, self.hue);
        if ring >= 0 && ring < RING_COUNT as i32 {
            self.brightness[ring as usize][self.current_spoke as usize] = 255;
        }
        self.position += self.speed;

        if self.position < 0 {
            self.position = 0;
            self.speed = START_SPEED;
            self.current_spoke =
                (self.current_spoke + (SPOKE_COUNT as i32 / 2) + 1) % SPOKE_COUNT as i32;
        }
        self.speed -= 1;
        self.hue = self.hue.wrapping_add(1);

        AnimationResult::new(ANIMATION_NAME_ORBIT, 40)
    }
}

/// Up to three symmetric balls spaced every sixth spoke, sharing one
/// trajectory. The shared hue jumps on every wrap so consecutive passes
/// read as different triads.
#[derive(Debug, Clone)]
pub struct TriadOrbitsAnimation {
    position: i32,
    speed: i32,
    current_spoke: i32,
    hue: u8,
    brightness: BrightnessGrid,
}

impl Default for TriadOrbitsAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl TriadOrbitsAnimation {
    pub const fn new() -> Self {
        Self {
            position: -START_SPEED,
            speed: START_SPEED,
            current_spoke: 0,
            hue: 0,
            brightness: [[0; SPOKE_COUNT]; RING_COUNT],
        }
    }
}

impl Animation for TriadOrbitsAnimation {
    #[allow(clippy::cast_sign_loss)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        fade_and_draw(&mut self.brightness, self.hue, 10, sink);

        let ring = self.position / DIVISOR;
        let mut spoke = self.current_spoke;
        while spoke < SPOKE_COUNT as i32 {
            sink.set_hue(ring, spoke, self.hue);
            if ring >= 0 && ring < RING_COUNT as i32 {
                self.brightness[ring as usize][spoke as usize] = 255;
            }
            spoke += 6;
        }
        self.position += self.speed;

        if self.position < 0 {
            self.position = 0;
            self.speed = START_SPEED;
            self.current_spoke = (self.current_spoke + 2) % 6;
            self.hue = self.hue.wrapping_add(50);
        }
        self.speed -= 1;
        self.hue = self.hue.wrapping_add(1);

        AnimationResult::new(ANIMATION_NAME_TRIAD_ORBITS, 40)
    }
}
