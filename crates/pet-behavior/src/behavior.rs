//! The fixed set of behaviors and their static selection table.
//!
//! Selection weights are computed in one place, [`Behavior::weight`], from
//! the static base weight times a personality/need modifier:
//!
//! | Behavior   | base | modifier                              | dwell (s) |
//! |------------|------|---------------------------------------|-----------|
//! | `Idle`     | 1.0  | none                                  | 3 – 8     |
//! | `Walking`  | 0.7  | none                                  | 5 – 15    |
//! | `Playing`  | 0.5  | playfulness × energy / 100            | 5 – 10    |
//! | `Sleeping` | 0.3  | laziness × (100 − energy) / 100       | 10 – 30   |
//! | `Hunting`  | 0.4  | curiosity × hunger / 100              | 3 – 8     |

use std::fmt;

use pet_core::PetRng;

use crate::needs::NEED_MAX;
use crate::{NeedsState, Personality};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Behavior {
    #[default]
    Idle,
    Walking,
    Playing,
    Sleeping,
    Hunting,
}

/// Static selection parameters of one behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BehaviorProfile {
    /// Weight before personality and need modifiers.
    pub base_weight: f64,
    /// Shortest dwell threshold in seconds.
    pub min_dwell: f64,
    /// Longest dwell threshold in seconds.
    pub max_dwell: f64,
}

impl Behavior {
    /// Every behavior, in selection-table order.
    pub const ALL: [Behavior; 5] = [
        Behavior::Idle,
        Behavior::Walking,
        Behavior::Playing,
        Behavior::Sleeping,
        Behavior::Hunting,
    ];

    pub const fn profile(self) -> BehaviorProfile {
        match self {
            Behavior::Idle     => BehaviorProfile { base_weight: 1.0, min_dwell: 3.0,  max_dwell: 8.0 },
            Behavior::Walking  => BehaviorProfile { base_weight: 0.7, min_dwell: 5.0,  max_dwell: 15.0 },
            Behavior::Playing  => BehaviorProfile { base_weight: 0.5, min_dwell: 5.0,  max_dwell: 10.0 },
            Behavior::Sleeping => BehaviorProfile { base_weight: 0.3, min_dwell: 10.0, max_dwell: 30.0 },
            Behavior::Hunting  => BehaviorProfile { base_weight: 0.4, min_dwell: 3.0,  max_dwell: 8.0 },
        }
    }

    /// Lottery weight given the pet's personality and current needs.
    pub fn weight(self, personality: &Personality, needs: &NeedsState) -> f64 {
        let base = self.profile().base_weight;
        match self {
            Behavior::Idle | Behavior::Walking => base,
            Behavior::Playing  => base * personality.playfulness() * (needs.energy / NEED_MAX),
            Behavior::Sleeping => base * personality.laziness() * ((NEED_MAX - needs.energy) / NEED_MAX),
            Behavior::Hunting  => base * personality.curiosity() * (needs.hunger / NEED_MAX),
        }
    }

    /// Draw a dwell threshold uniformly from this behavior's range.
    #[inline]
    pub fn sample_dwell(self, rng: &mut PetRng) -> f64 {
        let p = self.profile();
        rng.uniform(p.min_dwell, p.max_dwell)
    }

    /// `true` for behaviors that head for a wander target when chosen by lottery.
    #[inline]
    pub fn seeks_target(self) -> bool {
        matches!(self, Behavior::Walking | Behavior::Hunting)
    }

    /// Lower-case name used in logs and trace files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Behavior::Idle     => "idle",
            Behavior::Walking  => "walking",
            Behavior::Playing  => "playing",
            Behavior::Sleeping => "sleeping",
            Behavior::Hunting  => "hunting",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
