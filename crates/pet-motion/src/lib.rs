//! `pet-motion`: physics state and the fixed-step motion integrator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`state`]       | `PhysicsState`, `Facing`                                        |
//! | [`integrator`]  | `MotionIntegrator`, `MotionConfig`, `StepOutcome`               |
//! | [`error`]       | `MotionError`, `MotionResult<T>`                                |
//!
//! # Movement model (seek + friction)
//!
//! Each step:
//!
//! 1. With a target farther than the arrival radius, acceleration points at
//!    it with magnitude 2.0 while hunting and 1.0 otherwise, and the sprite
//!    turns to face it.  Within the radius acceleration drops to zero and
//!    the step reports `arrived`.
//! 2. Per axis: `v += a·dt`, `v *= friction`, `p += v`.
//! 3. The position is clamped so the sprite stays on screen.
//!
//! The integrator does not own the target.  Arrival is returned to the
//! caller, which clears the target in the behavior engine's needs.

pub mod error;
pub mod integrator;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::{MotionError, MotionResult};
pub use integrator::{MotionConfig, MotionIntegrator, StepOutcome};
pub use state::{Facing, PhysicsState};
