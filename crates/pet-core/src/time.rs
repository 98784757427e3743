//! Time model.
//!
//! # Design
//!
//! The simulation never reads the clock itself.  The host passes a
//! [`Timestamp`] (seconds since the Unix epoch, as `f64`) into every
//! update, which keeps the behavior engine testable with synthetic time.
//!
//! Headless runs use [`FrameClock`] to derive timestamps from a tick
//! counter:
//!
//!   now = start + tick * frame_secs
//!
//! so a run of N ticks always covers exactly N frame intervals.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// Wall-clock instant in seconds since the Unix epoch.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(0.0);

    /// Read the system clock.  Only the host loop should call this.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Timestamp(secs)
    }

    /// Seconds elapsed from `earlier` to `self`, floored at zero.
    ///
    /// A clock that steps backwards yields `0.0` rather than a negative
    /// interval.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> f64 {
        let dt = self.0 - earlier.0;
        if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
    }

    /// The timestamp `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> Timestamp {
        Timestamp(self.0 + secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Count of frames processed by the host loop.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Maps frame ticks onto timestamps for fixed-rate runs.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Timestamp of tick 0.
    pub start: Timestamp,
    /// Seconds between frames.  Default: 0.05 (50 ms).
    pub frame_secs: f64,
    /// The current tick, advanced by `FrameClock::advance()` each frame.
    pub current_tick: Tick,
}

impl FrameClock {
    pub fn new(start: Timestamp, frame_secs: f64) -> Self {
        Self { start, frame_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Timestamp corresponding to `current_tick`.
    #[inline]
    pub fn now(&self) -> Timestamp {
        self.at(self.current_tick)
    }

    /// Timestamp corresponding to an arbitrary tick.
    #[inline]
    pub fn at(&self, tick: Tick) -> Timestamp {
        self.start.offset(tick.0 as f64 * self.frame_secs)
    }

    /// Elapsed seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.frame_secs
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{:.2}s)", self.current_tick, self.elapsed_secs())
    }
}
