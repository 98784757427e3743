//! Top-level companion configuration.
//!
//! Typically loaded from a TOML file by the application crate and passed to
//! the companion builder.  Every field has a default, so an empty file (or
//! no file at all) yields the stock desktop cat.

use std::path::PathBuf;

use crate::error::check_range;
use crate::{FrameClock, PetError, PetResult, ScreenBounds, Timestamp};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PetConfig {
    /// Screen size and sprite size used for clamping and wander targets.
    pub screen: ScreenBounds,

    /// Integration step handed to the motion integrator each frame.
    /// Default: 0.05.
    pub physics_dt: f64,

    /// Milliseconds between frames of the host loop.  Default: 50.
    pub frame_interval_ms: u64,

    /// Per-update probability of an opportunistic needs snapshot.
    /// Default: 0.01.
    pub snapshot_chance: f64,

    /// Directory holding `cat_personality.json` and `cat_state.json`.
    pub data_dir: PathBuf,

    /// Master RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            screen:            ScreenBounds::default(),
            physics_dt:        0.05,
            frame_interval_ms: 50,
            snapshot_chance:   0.01,
            data_dir:          PathBuf::from("."),
            seed:              None,
        }
    }
}

impl PetConfig {
    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> PetResult<()> {
        let s = &self.screen;
        let finite = s.width.is_finite() && s.height.is_finite() && s.sprite_size.is_finite();
        if !(finite && s.width > 0.0 && s.height > 0.0 && s.sprite_size >= 0.0) {
            return Err(PetError::Config(format!(
                "screen must have positive size, got {}x{} with sprite {}",
                s.width, s.height, s.sprite_size
            )));
        }
        if !(self.physics_dt.is_finite() && self.physics_dt > 0.0) {
            return Err(PetError::Config(format!(
                "physics_dt must be positive, got {}",
                self.physics_dt
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(PetError::Config("frame_interval_ms must be non-zero".into()));
        }
        check_range("snapshot_chance", self.snapshot_chance, 0.0, 1.0)?;
        Ok(())
    }

    /// Seconds between frames.
    #[inline]
    pub fn frame_secs(&self) -> f64 {
        self.frame_interval_ms as f64 / 1000.0
    }

    /// Construct a `FrameClock` for a run starting at `start`.
    pub fn make_clock(&self, start: Timestamp) -> FrameClock {
        FrameClock::new(start, self.frame_secs())
    }
}
