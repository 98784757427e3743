//! Plain data records written to disk.

use pet_behavior::{BehaviorResult, NeedsState, Personality};
use pet_core::Timestamp;
use serde::{Deserialize, Serialize};

/// On-disk shape of `cat_personality.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityRecord {
    pub playfulness:  f64,
    pub laziness:     f64,
    pub curiosity:    f64,
    pub friendliness: f64,
}

impl From<&Personality> for PersonalityRecord {
    fn from(p: &Personality) -> Self {
        Self {
            playfulness:  p.playfulness(),
            laziness:     p.laziness(),
            curiosity:    p.curiosity(),
            friendliness: p.friendliness(),
        }
    }
}

impl PersonalityRecord {
    /// Validate every trait.  A single bad field rejects the whole record.
    pub fn into_personality(self) -> BehaviorResult<Personality> {
        Personality::new(self.playfulness, self.laziness, self.curiosity, self.friendliness)
    }
}

/// On-disk shape of `cat_state.json`.
///
/// The movement target and behavior start time are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeedsRecord {
    pub energy:      f64,
    pub happiness:   f64,
    pub hunger:      f64,
    /// Seconds since the Unix epoch.
    pub last_update: f64,
}

impl From<&NeedsState> for NeedsRecord {
    fn from(n: &NeedsState) -> Self {
        Self {
            energy:      n.energy,
            happiness:   n.happiness,
            hunger:      n.hunger,
            last_update: n.last_update.0,
        }
    }
}

impl NeedsRecord {
    /// Validate and rebuild needs; the current behavior is taken to start at `now`.
    pub fn into_needs(self, now: Timestamp) -> BehaviorResult<NeedsState> {
        NeedsState::restore(
            self.energy,
            self.happiness,
            self.hunger,
            Timestamp(self.last_update),
            now,
        )
    }
}
