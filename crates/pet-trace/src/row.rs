//! Plain data row types written by trace backends.

use pet_behavior::{Behavior, SwitchReason};
use pet_motion::Facing;
use pet_sim::Frame;

/// Physics and needs at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRow {
    pub tick:      u64,
    /// Seconds since the Unix epoch.
    pub time:      f64,
    pub behavior:  Behavior,
    pub x:         f64,
    pub y:         f64,
    pub vx:        f64,
    pub vy:        f64,
    pub facing:    Facing,
    pub energy:    f64,
    pub hunger:    f64,
    pub happiness: f64,
}

impl From<&Frame> for TickRow {
    fn from(f: &Frame) -> Self {
        Self {
            tick:      f.tick.0,
            time:      f.now.0,
            behavior:  f.behavior,
            x:         f.physics.position.x,
            y:         f.physics.position.y,
            vx:        f.physics.velocity.x,
            vy:        f.physics.velocity.y,
            facing:    f.physics.facing,
            energy:    f.energy,
            hunger:    f.hunger,
            happiness: f.happiness,
        }
    }
}

/// One behavior re-selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorChangeRow {
    pub tick:   u64,
    pub time:   f64,
    pub from:   Behavior,
    pub to:     Behavior,
    pub reason: SwitchReason,
}
