//! Screen-space geometry.
//!
//! Coordinates are `f64` screen pixels with the origin at the top-left
//! corner of the primary display.  The pet's position is the top-left
//! corner of its sprite window, so the reachable area is the screen shrunk
//! by one sprite on each axis.

use std::ops::{Add, Mul, Sub};

/// A point (or displacement) in screen pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when the point is read as a vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Straight-line distance in pixels.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Point::new(self.x / len, self.y / len))
        } else {
            None
        }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── ScreenBounds ──────────────────────────────────────────────────────────────

/// Screen dimensions plus the square sprite size of the pet window.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScreenBounds {
    pub width:       f64,
    pub height:      f64,
    pub sprite_size: f64,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self { width: 1920.0, height: 1080.0, sprite_size: 200.0 }
    }
}

impl ScreenBounds {
    #[inline]
    pub fn new(width: f64, height: f64, sprite_size: f64) -> Self {
        Self { width, height, sprite_size }
    }

    /// Largest x the sprite's top-left corner may take.  Never negative.
    #[inline]
    pub fn max_x(&self) -> f64 {
        (self.width - self.sprite_size).max(0.0)
    }

    /// Largest y the sprite's top-left corner may take.  Never negative.
    #[inline]
    pub fn max_y(&self) -> f64 {
        (self.height - self.sprite_size).max(0.0)
    }

    /// Clamp a sprite position into `[0, dim - sprite]` on both axes.
    ///
    /// The lower bound wins when the screen is smaller than the sprite.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.min(self.width - self.sprite_size).max(0.0),
            p.y.min(self.height - self.sprite_size).max(0.0),
        )
    }

    /// `true` if `p` is a valid sprite position.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.max_x()).contains(&p.x) && (0.0..=self.max_y()).contains(&p.y)
    }
}
