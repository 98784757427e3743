//! Simulated needs and the movement target.

use pet_core::error::check_range;
use pet_core::{Point, Timestamp};

use crate::{BehaviorError, BehaviorResult};

pub const NEED_MIN: f64 = 0.0;
pub const NEED_MAX: f64 = 100.0;

/// Energy lost per second, before scaling by laziness.
pub const ENERGY_DECAY_PER_SEC: f64 = 0.1;
/// Hunger gained per second.
pub const HUNGER_GROWTH_PER_SEC: f64 = 0.15;
/// Happiness lost per second.
pub const HAPPINESS_DECAY_PER_SEC: f64 = 0.05;

/// Happiness gained from being petted.
pub const PET_HAPPINESS: f64 = 10.0;
/// Hunger removed by one feeding.
pub const FEED_HUNGER: f64 = 30.0;
/// Happiness gained from one feeding.
pub const FEED_HAPPINESS: f64 = 10.0;

#[inline]
fn clamp_need(v: f64) -> f64 {
    if v.is_nan() { NEED_MIN } else { v.clamp(NEED_MIN, NEED_MAX) }
}

/// Mutable simulated state of the pet.
///
/// `energy`, `happiness` and `hunger` are kept in `[0, 100]` by every method
/// on this type.  Callers that write the fields directly are responsible
/// for the same range.
#[derive(Clone, Debug, PartialEq)]
pub struct NeedsState {
    pub energy:    f64,
    pub happiness: f64,
    pub hunger:    f64,

    /// Timestamp of the previous decay step.
    pub last_update: Timestamp,

    /// Where the pet is heading, if anywhere.
    pub target: Option<Point>,

    /// When the current behavior began.
    pub state_change: Timestamp,
}

impl NeedsState {
    /// A well-rested, content, fed pet whose clocks start at `now`.
    pub fn fresh(now: Timestamp) -> Self {
        Self {
            energy:       NEED_MAX,
            happiness:    NEED_MAX,
            hunger:       NEED_MIN,
            last_update:  now,
            target:       None,
            state_change: now,
        }
    }

    /// Restore persisted levels.  Rejects values outside `[0, 100]` or a
    /// non-finite `last_update` instead of clamping them.
    pub fn restore(
        energy:       f64,
        happiness:    f64,
        hunger:       f64,
        last_update:  Timestamp,
        state_change: Timestamp,
    ) -> BehaviorResult<Self> {
        let check = |field: &'static str, v: f64| check_range(field, v, NEED_MIN, NEED_MAX)
            .map_err(BehaviorError::Needs);
        let energy    = check("energy", energy)?;
        let happiness = check("happiness", happiness)?;
        let hunger    = check("hunger", hunger)?;
        check_range("last_update", last_update.0, f64::MIN, f64::MAX)
            .map_err(BehaviorError::Needs)?;
        Ok(Self {
            energy,
            happiness,
            hunger,
            last_update,
            target: None,
            state_change,
        })
    }

    /// Apply `dt` seconds of decay and clamp every need.
    pub fn decay(&mut self, dt: f64, laziness: f64) {
        self.energy    = clamp_need(self.energy - dt * ENERGY_DECAY_PER_SEC * laziness);
        self.hunger    = clamp_need(self.hunger + dt * HUNGER_GROWTH_PER_SEC);
        self.happiness = clamp_need(self.happiness - dt * HAPPINESS_DECAY_PER_SEC);
    }

    /// The user stroked the pet.
    pub fn pet(&mut self) {
        self.happiness = clamp_need(self.happiness + PET_HAPPINESS);
    }

    /// The user fed the pet.
    pub fn feed(&mut self) {
        self.hunger    = clamp_need(self.hunger - FEED_HUNGER);
        self.happiness = clamp_need(self.happiness + FEED_HAPPINESS);
    }

    /// `true` if every need is inside `[0, 100]`.
    pub fn in_range(&self) -> bool {
        [self.energy, self.happiness, self.hunger]
            .iter()
            .all(|v| (NEED_MIN..=NEED_MAX).contains(v))
    }
}
