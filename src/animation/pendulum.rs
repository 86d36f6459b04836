//! Pendulum column

use super::orbit::{BrightnessGrid, fade_and_draw};
use super::{ANIMATION_NAME_PENDULUM, Animation, AnimationResult};
use crate::sink::WheelSink;
use crate::topology::{RING_COUNT, SPOKE_COUNT};

const DIVISOR: i32 = 16;
const FADE: u8 = 10;

/// A full column of light swinging across the spokes.
///
/// The acceleration only flips at the upper bound; the lower turn comes
/// from accumulated deceleration alone, so the swing is not symmetric.
#[derive(Debug, Clone)]
pub struct PendulumAnimation {
    position: i32,
    speed: i32,
    hue: u8,
    brightness: BrightnessGrid,
}

impl Default for PendulumAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl PendulumAnimation {
    pub const fn new() -> Self {
        Self {
            position: DIVISOR * 2 + DIVISOR / 3,
            speed: 0,
            hue: 0,
            brightness: [[0; SPOKE_COUNT]; RING_COUNT],
        }
    }
}

impl Animation for PendulumAnimation {
    #[allow(clippy::cast_sign_loss)]
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        fade_and_draw(&mut self.brightness, self.hue, FADE, sink);

        // The pendulum should always be maximum brightness
        let spoke = self.position / DIVISOR;
        for ring in 0..RING_COUNT as i32 {
            sink.set_hue(ring, spoke, self.hue);
            if spoke >= 0 && spoke < SPOKE_COUNT as i32 {
                self.brightness[ring as usize][spoke as usize] = 255;
            }
        }
        self.position += self.speed;

        if self.position >= 9 * DIVISOR {
            self.speed -= 1;
        } else {
            self.speed += 1;
        }
        self.hue = self.hue.wrapping_add(1);

        AnimationResult::new(ANIMATION_NAME_PENDULUM, 40)
    }
}
