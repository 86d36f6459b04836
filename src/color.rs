//! Color types and HSV conversion
//!
//! Re-uses the `smart-leds` channel types but carries its own HSV->RGB
//! conversion: the original controller uses the classic six-region integer
//! algorithm, which differs from the FastLED rainbow mapping shipped with
//! `smart-leds`. Exact value parity matters here, otherwise hue gradients
//! band differently than on the device.

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Convert 8-bit HSV to 8-bit RGB with the six-region integer algorithm.
///
/// Saturation 0 short-circuits to pure gray. Hue wraps over 0-255 with
/// `hue / 43` selecting the region and the remainder scaled by 6.
#[allow(clippy::cast_possible_truncation)]
pub const fn hsv2rgb(hsv: Hsv) -> Rgb {
    let (hue, sat, val) = (hsv.hue, hsv.sat, hsv.val);

    if sat == 0 {
        return Rgb {
            r: val,
            g: val,
            b: val,
        };
    }

    let region = hue / 43;
    let remainder = (hue - region * 43) * 6; // fits: max 42 * 6 = 252

    let v = val as u16;
    let s = sat as u16;
    let rem = remainder as u16;

    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * rem) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - rem)) >> 8))) >> 8) as u8;

    let (r, g, b) = match region {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };

    Rgb { r, g, b }
}

/// Shorthand for a fully saturated, full-value hue.
#[inline]
pub const fn hue_color(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}
