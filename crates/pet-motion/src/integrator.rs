//! Fixed-step seek-and-friction integrator.

use pet_behavior::Behavior;
use pet_core::{Point, ScreenBounds};

use crate::{Facing, MotionError, MotionResult, PhysicsState};

/// Tunables for [`MotionIntegrator`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionConfig {
    /// Within this distance (pixels) the target counts as reached.
    pub arrive_radius: f64,
    /// Acceleration magnitude while hunting.
    pub hunt_accel: f64,
    /// Acceleration magnitude for every other behavior.
    pub walk_accel: f64,
    /// Velocity multiplier applied every step.
    pub friction: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            arrive_radius: 5.0,
            hunt_accel:    2.0,
            walk_accel:    1.0,
            friction:      0.95,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> MotionResult<()> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(MotionError::Friction(self.friction));
        }
        for (name, accel) in [("hunt_accel", self.hunt_accel), ("walk_accel", self.walk_accel)] {
            if !(accel.is_finite() && accel >= 0.0) {
                return Err(MotionError::Config(format!(
                    "{name} must be finite and non-negative, got {accel}"
                )));
            }
        }
        if !(self.arrive_radius.is_finite() && self.arrive_radius >= 0.0) {
            return Err(MotionError::Config(format!(
                "arrive_radius must be non-negative, got {}",
                self.arrive_radius
            )));
        }
        Ok(())
    }

    #[inline]
    fn accel_for(&self, behavior: Behavior) -> f64 {
        if behavior == Behavior::Hunting { self.hunt_accel } else { self.walk_accel }
    }
}

/// Result of one [`MotionIntegrator::step`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepOutcome {
    /// State after the step.
    pub state: PhysicsState,
    /// The target was within the arrival radius.  The caller must clear it.
    pub arrived: bool,
}

/// Owns the sprite's [`PhysicsState`] and advances it one frame at a time.
#[derive(Clone, Debug)]
pub struct MotionIntegrator {
    state:  PhysicsState,
    bounds: ScreenBounds,
    config: MotionConfig,
}

impl MotionIntegrator {
    /// Create an integrator at `state`, clamped into `bounds`.
    pub fn new(state: PhysicsState, bounds: ScreenBounds, config: MotionConfig) -> MotionResult<Self> {
        config.validate()?;
        let mut state = state;
        state.position = bounds.clamp(state.position);
        Ok(Self { state, bounds, config })
    }

    #[inline]
    pub fn state(&self) -> &PhysicsState {
        &self.state
    }

    #[inline]
    pub fn bounds(&self) -> &ScreenBounds {
        &self.bounds
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Advance one fixed step of `dt` toward `target`.
    ///
    /// Without a target, acceleration carries over from the previous step.
    pub fn step(&mut self, dt: f64, behavior: Behavior, target: Option<Point>) -> StepOutcome {
        let mut arrived = false;

        if let Some(target) = target {
            let delta = target - self.state.position;
            let distance = delta.length();
            match delta.normalized() {
                Some(dir) if distance > self.config.arrive_radius => {
                    self.state.acceleration = dir * self.config.accel_for(behavior);
                    self.state.facing = Facing::from_dx(dir.x);
                }
                _ => {
                    self.state.acceleration = Point::ZERO;
                    arrived = true;
                    tracing::trace!(%target, position = %self.state.position, "arrived");
                }
            }
        }

        let s = &mut self.state;
        s.velocity = (s.velocity + s.acceleration * dt) * self.config.friction;
        s.position = self.bounds.clamp(s.position + s.velocity);

        StepOutcome { state: self.state, arrived }
    }

    /// Move the sprite directly, e.g. while the user drags it.
    ///
    /// Velocity and acceleration are kept, so the pet resumes its glide
    /// from the new spot once released.
    pub fn place(&mut self, position: Point) {
        self.state.position = self.bounds.clamp(position);
    }

    /// Adopt new screen bounds (display change) and re-clamp.
    pub fn set_bounds(&mut self, bounds: ScreenBounds) {
        self.bounds = bounds;
        self.state.position = bounds.clamp(self.state.position);
    }
}
