//! Read-only per-tick snapshot for renderers and observers.

use pet_behavior::Behavior;
use pet_core::{Point, Tick, Timestamp};
use pet_motion::PhysicsState;

use crate::Pose;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick:      Tick,
    pub now:       Timestamp,
    pub behavior:  Behavior,
    pub physics:   PhysicsState,
    pub target:    Option<Point>,
    pub energy:    f64,
    pub hunger:    f64,
    pub happiness: f64,
    pub pose:      Pose,
}

impl Frame {
    /// Window origin in whole pixels (truncated toward zero).
    #[inline]
    pub fn window_origin(&self) -> (i32, i32) {
        (self.physics.position.x as i32, self.physics.position.y as i32)
    }
}
