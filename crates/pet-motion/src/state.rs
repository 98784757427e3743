//! Transient physics state of the pet sprite.

use std::fmt;

use pet_core::{PetRng, Point, ScreenBounds};

/// Horizontal direction the sprite is drawn facing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// `+1` for right, `-1` for left.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Facing::Right => 1,
            Facing::Left  => -1,
        }
    }

    /// Right only for a strictly positive horizontal component.
    #[inline]
    pub fn from_dx(dx: f64) -> Self {
        if dx > 0.0 { Facing::Right } else { Facing::Left }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Facing::Right => "right",
            Facing::Left  => "left",
        })
    }
}

/// Position, velocity and acceleration of the sprite.  Never persisted.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PhysicsState {
    /// Top-left corner of the sprite in screen pixels.
    pub position:     Point,
    /// Pixels per step.
    pub velocity:     Point,
    pub acceleration: Point,
    pub facing:       Facing,
}

impl PhysicsState {
    /// At rest at `position`, facing right.
    #[inline]
    pub fn at_rest(position: Point) -> Self {
        Self { position, ..Self::default() }
    }

    /// At rest on a random whole-pixel position inside `bounds`.
    pub fn spawn(bounds: &ScreenBounds, rng: &mut PetRng) -> Self {
        let x = rng.gen_range(0..=bounds.max_x().floor() as u32);
        let y = rng.gen_range(0..=bounds.max_y().floor() as u32);
        Self::at_rest(Point::new(x as f64, y as f64))
    }

    /// Current speed in pixels per step.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}
