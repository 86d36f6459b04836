//! 8-bit fixed-point math
//!
//! Integer-only helpers sized for constrained hardware: no floats, no
//! math library.

/// Interleaved `(base, slope/16)` pairs for the four sections of a
/// quarter sine wave.
const B_M16_INTERLEAVE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Approximate sine over an 8-bit phase.
///
/// `theta` covers a full period over 0-255; the result is
/// `128 + 127*sin(2*pi*theta/256)` approximated piecewise-linearly over a
/// quarter wave. Bits 6 and 7 of `theta` select the mirrored and negated
/// quarters.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F; // 0..63

    let mut secoffset = offset & 0x0F; // 0..15
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = (offset >> 4) as usize; // 0..3
    let b = B_M16_INTERLEAVE[section * 2];
    let m16 = B_M16_INTERLEAVE[section * 2 + 1];

    let mx = ((m16 as u16 * secoffset as u16) >> 4) as u8;

    // mx + b stays within 0..=127, so the sign flip is lossless
    let mut y = (mx + b) as i8;
    if theta & 0x80 != 0 {
        y = -y;
    }

    (y as u8).wrapping_add(128)
}
