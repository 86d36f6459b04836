//! Wheel topology and address mapping
//!
//! The logical grid is `RING_COUNT` concentric rings sharing `SPOKE_COUNT`
//! angular positions. Two independent wiring policies exist and must stay
//! separate - they describe different physical harnesses:
//!
//! - [`display_wired`]: which logical cells carry an LED on the display
//!   harness (inner rings only populate even spokes, the outer ring skips
//!   every fourth spoke).
//! - [`ring_spoke_to_index`]: the 50-LED strip harness, where three of
//!   every four spokes carry full ring wiring, one carries only the
//!   outermost LED and one carries none.

use crate::color::Rgb;
use crate::sink::Frame;

/// Angular positions shared by all rings. The outer ring has 18 physical
/// positions; the inner ones only have 9.
pub const SPOKE_COUNT: usize = 18;

/// Concentric rings, indexed 0 (innermost) to 4 (outermost).
pub const RING_COUNT: usize = 5;

/// Physical LED count of the strip harness.
pub const STRIP_LED_COUNT: usize = 50;

/// Display-harness wiring rule.
///
/// Expects in-range logical coordinates; the sink handles range checks.
#[inline]
pub const fn display_wired(ring: usize, spoke: usize) -> bool {
    // The inner spokes are only half wired up
    if ring != RING_COUNT - 1 && spoke % 2 == 1 {
        return false;
    }
    // The outer ring is only 3/4 hooked up
    if ring == RING_COUNT - 1 && spoke % 4 == 3 {
        return false;
    }
    true
}

/// Map a logical `(ring, spoke)` onto the strip harness.
///
/// Returns `None` for unwired positions. Total over all inputs: any
/// out-of-range coordinate is unwired, never an error.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ring_spoke_to_index(ring: i32, spoke: i32) -> Option<u8> {
    if ring < 0 || ring >= RING_COUNT as i32 || spoke < 0 || spoke >= SPOKE_COUNT as i32 {
        return None;
    }
    let index = match spoke % 4 {
        0 => (spoke / 4) * 11 + ring,
        // Only the outermost LED is wired on these spokes
        1 => {
            if ring != RING_COUNT as i32 - 1 {
                return None;
            }
            (spoke / 4) * 11 + 5
        }
        // Wired in reverse, running back inward
        2 => (spoke / 4) * 11 + 6 + (RING_COUNT as i32 - 1 - ring),
        _ => return None,
    };
    debug_assert!(index < STRIP_LED_COUNT as i32);
    Some(index as u8)
}

/// Flatten a logical frame onto the strip harness.
///
/// Unwired strip positions stay black. This is the bridge between the
/// logical grid the animations draw into and an [`crate::OutputDriver`]
/// feeding the physical LED chain.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn pack_frame(frame: &Frame) -> [Rgb; STRIP_LED_COUNT] {
    let mut strip = [Rgb::default(); STRIP_LED_COUNT];
    for (ring, row) in frame.iter().enumerate() {
        for (spoke, color) in row.iter().enumerate() {
            if let Some(index) = ring_spoke_to_index(ring as i32, spoke as i32) {
                strip[index as usize] = *color;
            }
        }
    }
    strip
}
