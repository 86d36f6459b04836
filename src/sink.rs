//! Logical frame buffer and LED sink
//!
//! Animations draw through [`WheelSink`], which applies range and wiring
//! checks before touching the frame. Invalid or unwired coordinates are a
//! silent no-op - for hardware-facing code "skip this LED" is always safe,
//! and several animations deliberately lean on it by writing tails past
//! the grid edges.

use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::math8::sin8;
use crate::topology::{RING_COUNT, SPOKE_COUNT, display_wired};

/// Logical ring-by-spoke frame.
pub type Frame = [[Rgb; SPOKE_COUNT]; RING_COUNT];

/// Bounds-and-wiring checked write access to a [`Frame`].
#[derive(Debug, Clone)]
pub struct WheelSink {
    frame: Frame,
}

impl Default for WheelSink {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelSink {
    pub const fn new() -> Self {
        Self {
            frame: [[Rgb { r: 0, g: 0, b: 0 }; SPOKE_COUNT]; RING_COUNT],
        }
    }

    /// Set a logical cell, silently dropping out-of-range or unwired
    /// coordinates.
    #[allow(clippy::cast_sign_loss)]
    pub fn set(&mut self, ring: i32, spoke: i32, color: Rgb) {
        if spoke < 0 || spoke >= SPOKE_COUNT as i32 {
            return;
        }
        if ring < 0 || ring >= RING_COUNT as i32 {
            return;
        }
        let (ring, spoke) = (ring as usize, spoke as usize);
        if !display_wired(ring, spoke) {
            return;
        }
        self.frame[ring][spoke] = color;
    }

    /// Fully saturated, full-value hue.
    pub fn set_hue(&mut self, ring: i32, spoke: i32, hue: u8) {
        self.set(
            ring,
            spoke,
            hsv2rgb(Hsv {
                hue,
                sat: 255,
                val: 255,
            }),
        );
    }

    /// Sine-shaped gray level.
    pub fn set_grayscale(&mut self, ring: i32, spoke: i32, v: u8) {
        let value = sin8(v);
        self.set(ring, spoke, Rgb { r: value, g: value, b: value });
    }

    /// Sine-shaped gray level at twice the pulse rate.
    pub fn set_double_grayscale(&mut self, ring: i32, spoke: i32, v: u8) {
        let value = sin8(v.wrapping_mul(2));
        self.set(ring, spoke, Rgb { r: value, g: value, b: value });
    }

    /// Three phase-shifted sine lobes; never reaches pure white or black.
    ///
    /// The phase offsets are computed in wide arithmetic and only then
    /// wrapped to 8 bits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_pastel(&mut self, ring: i32, spoke: i32, v: u8) {
        let wide = u16::from(v);
        let red = sin8(v);
        let green = sin8((wide + 2 * wide / 3) as u8);
        let blue = sin8((wide + 4 * wide / 3) as u8);
        self.set(ring, spoke, Rgb { r: red, g: green, b: blue });
    }

    /// Red ramp below the midpoint, green ramp above it.
    pub fn set_fire(&mut self, ring: i32, spoke: i32, v: u8) {
        let red = if v < 128 { v * 2 } else { 255 };
        let green = if v >= 128 { (v - 128) * 2 } else { 0 };
        self.set(ring, spoke, Rgb { r: red, g: green, b: 0 });
    }

    /// Reset every cell to black.
    pub fn clear(&mut self) {
        self.frame = [[Rgb { r: 0, g: 0, b: 0 }; SPOKE_COUNT]; RING_COUNT];
    }

    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Read a single cell; out-of-range reads come back black.
    pub fn get(&self, ring: usize, spoke: usize) -> Rgb {
        if ring < RING_COUNT && spoke < SPOKE_COUNT {
            self.frame[ring][spoke]
        } else {
            Rgb { r: 0, g: 0, b: 0 }
        }
    }
}
