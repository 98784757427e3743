//! Cosmetic animation phases.
//!
//! These never feed back into the simulation.  They advance once per frame
//! and are turned into a [`Pose`] the renderer can draw directly.

use std::f64::consts::PI;

use pet_behavior::Behavior;
use pet_core::PetRng;
use pet_motion::Facing;

const TAIL_STEP: f64 = 0.2;
const BREATH_STEP: f64 = 0.1;
const EAR_TWITCH_CHANCE: f64 = 0.02;
const BLINK_CHANCE: f64 = 0.01;
const BLINK_EYE_SIZE: f64 = 0.2;
const EYE_RECOVERY: f64 = 0.2;

/// Raw phases, advanced every frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// Radians; the tail swings with `sin(tail_angle)`.
    pub tail_angle: f64,
    /// Radians in `[0, π)`; re-rolled on an ear twitch.
    pub ear_angle: f64,
    /// Eye openness in `[0.2, 1.0]`; drops to 0.2 on a blink.
    pub eye_size: f64,
    /// Radians; body and whiskers rise and fall with `sin(breath_phase)`.
    pub breath_phase: f64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self { tail_angle: 0.0, ear_angle: 0.0, eye_size: 1.0, breath_phase: 0.0 }
    }
}

impl AnimationState {
    pub fn advance(&mut self, rng: &mut PetRng) {
        self.tail_angle += TAIL_STEP;
        self.breath_phase += BREATH_STEP;

        if rng.gen_bool(EAR_TWITCH_CHANCE) {
            self.ear_angle = rng.random::<f64>() * PI;
        }

        if rng.gen_bool(BLINK_CHANCE) {
            self.eye_size = BLINK_EYE_SIZE;
        } else {
            self.eye_size = (self.eye_size + EYE_RECOVERY).min(1.0);
        }
    }

    /// Resolve the phases into drawing offsets for `behavior`.
    pub fn pose(&self, behavior: Behavior, facing: Facing) -> Pose {
        let breath = self.breath_phase.sin();
        Pose {
            facing,
            body_offset:    breath * 3.0,
            tail_swing:     self.tail_angle.sin() * tail_amplitude(behavior),
            ear_twitch:     self.ear_angle.sin() * 5.0,
            whisker_offset: breath * 2.0,
            eye_openness:   self.eye_size,
            eyes_closed:    behavior == Behavior::Sleeping,
        }
    }
}

/// Tail swing multiplier per behavior.
pub fn tail_amplitude(behavior: Behavior) -> f64 {
    match behavior {
        Behavior::Playing  => 2.0,
        Behavior::Sleeping => 0.2,
        _ => 1.0,
    }
}

/// Everything a renderer needs to draw one frame of the cat, in sprite
/// pixels (offsets) or unitless factors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub facing:         Facing,
    /// Vertical breathing offset of the body, ±3 px.
    pub body_offset:    f64,
    /// Tail swing factor; the tail tip moves `20 * tail_swing` px.
    pub tail_swing:     f64,
    /// Horizontal ear offset, ±5 px.
    pub ear_twitch:     f64,
    /// Whisker tip offset, ±2 px.
    pub whisker_offset: f64,
    /// Eye height factor (1.0 = fully open).
    pub eye_openness:   f64,
    pub eyes_closed:    bool,
}
