//! Animation catalog with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation owns its persistent state (hue counters, positions,
//! per-cell brightness grids), mutates it in place on every invocation
//! and reports the delay its frame should stay visible. There is no clock
//! and no randomness: invoked N times from a fresh state, an animation
//! produces the same N frames every run.

mod comet;
mod hue_fill;
mod orbit;
mod pendulum;
mod rainbow_rings;
mod ripple;
mod spiral;

use embassy_time::Duration;

pub use comet::{BlurredSpiralAnimation, CometTail, CometsAnimation};
pub use hue_fill::{
    HueSweepAnimation, LightAllAnimation, OuterHueAnimation, SpinSingleAnimation,
    SweepDirection,
};
pub use orbit::{OrbitAnimation, TriadOrbitsAnimation};
pub use pendulum::PendulumAnimation;
pub use rainbow_rings::RainbowRingsAnimation;
pub use ripple::{OuterRippleAnimation, OutwardRippleAnimation};
pub use spiral::{SingleSpiralAnimation, SpiralAnimation};

use crate::sink::WheelSink;

pub(crate) const ANIMATION_NAME_OUTER_HUE: &str = "outer_hue";
pub(crate) const ANIMATION_NAME_OUTER_RIPPLE: &str = "outer_ripple";
pub(crate) const ANIMATION_NAME_PENDULUM: &str = "pendulum";
pub(crate) const ANIMATION_NAME_ORBIT: &str = "orbit";
pub(crate) const ANIMATION_NAME_TRIAD_ORBITS: &str = "triad_orbits";
pub(crate) const ANIMATION_NAME_BLURRED_SPIRAL: &str = "blurred_spiral";
pub(crate) const ANIMATION_NAME_BLURRED_SPIRAL_HUES: &str = "blurred_spiral_hues";
pub(crate) const ANIMATION_NAME_RAINBOW_RINGS: &str = "rainbow_rings";
pub(crate) const ANIMATION_NAME_COMETS_SHORT: &str = "comets_short";
pub(crate) const ANIMATION_NAME_COMETS: &str = "comets";
pub(crate) const ANIMATION_NAME_OUTWARD_RIPPLE_HUE: &str = "outward_ripple_hue";
pub(crate) const ANIMATION_NAME_SINGLE_SPIRAL: &str = "single_spiral";
pub(crate) const ANIMATION_NAME_OUTWARD_RIPPLE: &str = "outward_ripple";
pub(crate) const ANIMATION_NAME_SPIRAL: &str = "spiral";
pub(crate) const ANIMATION_NAME_LIGHT_ALL: &str = "light_all";
pub(crate) const ANIMATION_NAME_SPIN_SINGLE: &str = "spin_single";
pub(crate) const ANIMATION_NAME_FAST_OUTWARD_HUE: &str = "fast_outward_hue";
pub(crate) const ANIMATION_NAME_FAST_INWARD_HUE: &str = "fast_inward_hue";

const ANIMATION_ID_OUTER_HUE: u8 = 0;
const ANIMATION_ID_OUTER_RIPPLE: u8 = 1;
const ANIMATION_ID_PENDULUM: u8 = 2;
const ANIMATION_ID_ORBIT: u8 = 3;
const ANIMATION_ID_TRIAD_ORBITS: u8 = 4;
const ANIMATION_ID_BLURRED_SPIRAL: u8 = 5;
const ANIMATION_ID_BLURRED_SPIRAL_HUES: u8 = 6;
const ANIMATION_ID_RAINBOW_RINGS: u8 = 7;
const ANIMATION_ID_COMETS_SHORT: u8 = 8;
const ANIMATION_ID_COMETS: u8 = 9;
const ANIMATION_ID_OUTWARD_RIPPLE_HUE: u8 = 10;
const ANIMATION_ID_SINGLE_SPIRAL: u8 = 11;
const ANIMATION_ID_OUTWARD_RIPPLE: u8 = 12;
const ANIMATION_ID_SPIRAL: u8 = 13;
const ANIMATION_ID_LIGHT_ALL: u8 = 14;
const ANIMATION_ID_SPIN_SINGLE: u8 = 15;
const ANIMATION_ID_FAST_OUTWARD_HUE: u8 = 16;
const ANIMATION_ID_FAST_INWARD_HUE: u8 = 17;

/// Number of catalog entries.
pub const CATALOG_LEN: usize = 18;

/// Outcome of a single animation invocation: which animation ran (for UI
/// feedback) and how long its frame should stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationResult {
    pub name: &'static str,
    pub delay: Duration,
}

impl AnimationResult {
    pub const fn new(name: &'static str, delay_ms: u64) -> Self {
        Self {
            name,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

pub trait Animation {
    /// Render a single frame into the sink and advance the private state.
    fn render(&mut self, sink: &mut WheelSink) -> AnimationResult;
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Hue sweep around the outer ring only
    OuterHue(OuterHueAnimation),
    /// Traveling brightness pulse on the outer ring
    OuterRipple(OuterRippleAnimation),
    /// Oscillating column of light
    Pendulum(PendulumAnimation),
    /// Single decelerating ball with fading trail
    Orbit(OrbitAnimation),
    /// Up to three symmetric orbiting balls
    TriadOrbits(TriadOrbitsAnimation),
    /// Radial tails with one shared rotating hue
    BlurredSpiral(BlurredSpiralAnimation),
    /// Radial tails with per-spoke hue memory
    BlurredSpiralHues(BlurredSpiralAnimation),
    /// Two-phase rainbow ring fill
    RainbowRings(RainbowRingsAnimation),
    /// Short comet trails chasing around the wheel
    CometsShort(CometsAnimation),
    /// Long comet trails chasing around the wheel
    Comets(CometsAnimation),
    /// Brightness ripple with spoke-dependent hue
    OutwardRippleHue(OutwardRippleAnimation),
    /// One lit cell per ring forming a turning spiral
    SingleSpiral(SingleSpiralAnimation),
    /// Brightness ripple with a uniform hue
    OutwardRipple(OutwardRippleAnimation),
    /// Diagonal hue spiral over the full grid
    Spiral(SpiralAnimation),
    /// Uniform rotating hue across all cells
    LightAll(LightAllAnimation),
    /// Single stepping spoke with rotating hue
    SpinSingle(SpinSingleAnimation),
    /// Hue gradient growing outward by ring
    FastOutwardHue(HueSweepAnimation),
    /// Hue gradient growing inward by ring
    FastInwardHue(HueSweepAnimation),
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    OuterHue = ANIMATION_ID_OUTER_HUE,
    OuterRipple = ANIMATION_ID_OUTER_RIPPLE,
    Pendulum = ANIMATION_ID_PENDULUM,
    Orbit = ANIMATION_ID_ORBIT,
    TriadOrbits = ANIMATION_ID_TRIAD_ORBITS,
    BlurredSpiral = ANIMATION_ID_BLURRED_SPIRAL,
    BlurredSpiralHues = ANIMATION_ID_BLURRED_SPIRAL_HUES,
    RainbowRings = ANIMATION_ID_RAINBOW_RINGS,
    CometsShort = ANIMATION_ID_COMETS_SHORT,
    Comets = ANIMATION_ID_COMETS,
    OutwardRippleHue = ANIMATION_ID_OUTWARD_RIPPLE_HUE,
    SingleSpiral = ANIMATION_ID_SINGLE_SPIRAL,
    OutwardRipple = ANIMATION_ID_OUTWARD_RIPPLE,
    Spiral = ANIMATION_ID_SPIRAL,
    LightAll = ANIMATION_ID_LIGHT_ALL,
    SpinSingle = ANIMATION_ID_SPIN_SINGLE,
    FastOutwardHue = ANIMATION_ID_FAST_OUTWARD_HUE,
    FastInwardHue = ANIMATION_ID_FAST_INWARD_HUE,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_OUTER_HUE => Self::OuterHue,
            ANIMATION_ID_OUTER_RIPPLE => Self::OuterRipple,
            ANIMATION_ID_PENDULUM => Self::Pendulum,
            ANIMATION_ID_ORBIT => Self::Orbit,
            ANIMATION_ID_TRIAD_ORBITS => Self::TriadOrbits,
            ANIMATION_ID_BLURRED_SPIRAL => Self::BlurredSpiral,
            ANIMATION_ID_BLURRED_SPIRAL_HUES => Self::BlurredSpiralHues,
            ANIMATION_ID_RAINBOW_RINGS => Self::RainbowRings,
            ANIMATION_ID_COMETS_SHORT => Self::CometsShort,
            ANIMATION_ID_COMETS => Self::Comets,
            ANIMATION_ID_OUTWARD_RIPPLE_HUE => Self::OutwardRippleHue,
            ANIMATION_ID_SINGLE_SPIRAL => Self::SingleSpiral,
            ANIMATION_ID_OUTWARD_RIPPLE => Self::OutwardRipple,
            ANIMATION_ID_SPIRAL => Self::Spiral,
            ANIMATION_ID_LIGHT_ALL => Self::LightAll,
            ANIMATION_ID_SPIN_SINGLE => Self::SpinSingle,
            ANIMATION_ID_FAST_OUTWARD_HUE => Self::FastOutwardHue,
            ANIMATION_ID_FAST_INWARD_HUE => Self::FastInwardHue,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> AnimationSlot {
        match self {
            Self::OuterHue => AnimationSlot::OuterHue(OuterHueAnimation::new()),
            Self::OuterRipple => {
                AnimationSlot::OuterRipple(OuterRippleAnimation::new())
            }
            Self::Pendulum => AnimationSlot::Pendulum(PendulumAnimation::new()),
            Self::Orbit => AnimationSlot::Orbit(OrbitAnimation::new()),
            Self::TriadOrbits => {
                AnimationSlot::TriadOrbits(TriadOrbitsAnimation::new())
            }
            Self::BlurredSpiral => AnimationSlot::BlurredSpiral(
                BlurredSpiralAnimation::new(false),
            ),
            Self::BlurredSpiralHues => AnimationSlot::BlurredSpiralHues(
                BlurredSpiralAnimation::new(true),
            ),
            Self::RainbowRings => {
                AnimationSlot::RainbowRings(RainbowRingsAnimation::new())
            }
            Self::CometsShort => {
                AnimationSlot::CometsShort(CometsAnimation::new(CometTail::Short))
            }
            Self::Comets => {
                AnimationSlot::Comets(CometsAnimation::new(CometTail::Long))
            }
            Self::OutwardRippleHue => AnimationSlot::OutwardRippleHue(
                OutwardRippleAnimation::new(true),
            ),
            Self::SingleSpiral => {
                AnimationSlot::SingleSpiral(SingleSpiralAnimation::new())
            }
            Self::OutwardRipple => AnimationSlot::OutwardRipple(
                OutwardRippleAnimation::new(false),
            ),
            Self::Spiral => AnimationSlot::Spiral(SpiralAnimation::new()),
            Self::LightAll => AnimationSlot::LightAll(LightAllAnimation::new()),
            Self::SpinSingle => {
                AnimationSlot::SpinSingle(SpinSingleAnimation::new())
            }
            Self::FastOutwardHue => AnimationSlot::FastOutwardHue(
                HueSweepAnimation::new(SweepDirection::Outward),
            ),
            Self::FastInwardHue => AnimationSlot::FastInwardHue(
                HueSweepAnimation::new(SweepDirection::Inward),
            ),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OuterHue => ANIMATION_NAME_OUTER_HUE,
            Self::OuterRipple => ANIMATION_NAME_OUTER_RIPPLE,
            Self::Pendulum => ANIMATION_NAME_PENDULUM,
            Self::Orbit => ANIMATION_NAME_ORBIT,
            Self::TriadOrbits => ANIMATION_NAME_TRIAD_ORBITS,
            Self::BlurredSpiral => ANIMATION_NAME_BLURRED_SPIRAL,
            Self::BlurredSpiralHues => ANIMATION_NAME_BLURRED_SPIRAL_HUES,
            Self::RainbowRings => ANIMATION_NAME_RAINBOW_RINGS,
            Self::CometsShort => ANIMATION_NAME_COMETS_SHORT,
            Self::Comets => ANIMATION_NAME_COMETS,
            Self::OutwardRippleHue => ANIMATION_NAME_OUTWARD_RIPPLE_HUE,
            Self::SingleSpiral => ANIMATION_NAME_SINGLE_SPIRAL,
            Self::OutwardRipple => ANIMATION_NAME_OUTWARD_RIPPLE,
            Self::Spiral => ANIMATION_NAME_SPIRAL,
            Self::LightAll => ANIMATION_NAME_LIGHT_ALL,
            Self::SpinSingle => ANIMATION_NAME_SPIN_SINGLE,
            Self::FastOutwardHue => ANIMATION_NAME_FAST_OUTWARD_HUE,
            Self::FastInwardHue => ANIMATION_NAME_FAST_INWARD_HUE,
        }
    }
}

impl AnimationSlot {
    /// Render the current animation
    pub fn render(&mut self, sink: &mut WheelSink) -> AnimationResult {
        match self {
            Self::OuterHue(animation) => animation.render(sink),
            Self::OuterRipple(animation) => animation.render(sink),
            Self::Pendulum(animation) => animation.render(sink),
            Self::Orbit(animation) => animation.render(sink),
            Self::TriadOrbits(animation) => animation.render(sink),
            Self::BlurredSpiral(animation) => animation.render(sink),
            Self::BlurredSpiralHues(animation) => animation.render(sink),
            Self::RainbowRings(animation) => animation.render(sink),
            Self::CometsShort(animation) => animation.render(sink),
            Self::Comets(animation) => animation.render(sink),
            Self::OutwardRippleHue(animation) => animation.render(sink),
            Self::SingleSpiral(animation) => animation.render(sink),
            Self::OutwardRipple(animation) => animation.render(sink),
            Self::Spiral(animation) => animation.render(sink),
            Self::LightAll(animation) => animation.render(sink),
            Self::SpinSingle(animation) => animation.render(sink),
            Self::FastOutwardHue(animation) => animation.render(sink),
            Self::FastInwardHue(animation) => animation.render(sink),
        }
    }

    /// Get the animation ID for external observation
    pub const fn id(&self) -> AnimationId {
        match self {
            Self::OuterHue(_) => AnimationId::OuterHue,
            Self::OuterRipple(_) => AnimationId::OuterRipple,
            Self::Pendulum(_) => AnimationId::Pendulum,
            Self::Orbit(_) => AnimationId::Orbit,
            Self::TriadOrbits(_) => AnimationId::TriadOrbits,
            Self::BlurredSpiral(_) => AnimationId::BlurredSpiral,
            Self::BlurredSpiralHues(_) => AnimationId::BlurredSpiralHues,
            Self::RainbowRings(_) => AnimationId::RainbowRings,
            Self::CometsShort(_) => AnimationId::CometsShort,
            Self::Comets(_) => AnimationId::Comets,
            Self::OutwardRippleHue(_) => AnimationId::OutwardRippleHue,
            Self::SingleSpiral(_) => AnimationId::SingleSpiral,
            Self::OutwardRipple(_) => AnimationId::OutwardRipple,
            Self::Spiral(_) => AnimationId::Spiral,
            Self::LightAll(_) => AnimationId::LightAll,
            Self::SpinSingle(_) => AnimationId::SpinSingle,
            Self::FastOutwardHue(_) => AnimationId::FastOutwardHue,
            Self::FastInwardHue(_) => AnimationId::FastInwardHue,
        }
    }
}

/// Build the full catalog in playback order.
pub fn catalog() -> [AnimationSlot; CATALOG_LEN] {
    [
        AnimationId::OuterHue.to_slot(),
        AnimationId::OuterRipple.to_slot(),
        AnimationId::Pendulum.to_slot(),
        AnimationId::Orbit.to_slot(),
        AnimationId::TriadOrbits.to_slot(),
        AnimationId::BlurredSpiral.to_slot(),
        AnimationId::BlurredSpiralHues.to_slot(),
        AnimationId::RainbowRings.to_slot(),
        AnimationId::CometsShort.to_slot(),
        AnimationId::Comets.to_slot(),
        AnimationId::OutwardRippleHue.to_slot(),
        AnimationId::SingleSpiral.to_slot(),
        AnimationId::OutwardRipple.to_slot(),
        AnimationId::Spiral.to_slot(),
        AnimationId::LightAll.to_slot(),
        AnimationId::SpinSingle.to_slot(),
        AnimationId::FastOutwardHue.to_slot(),
        AnimationId::FastInwardHue.to_slot(),
    ]
}
