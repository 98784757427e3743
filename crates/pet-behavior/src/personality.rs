//! Static per-installation personality traits.

use pet_core::PetRng;
use pet_core::error::check_range;

use crate::{BehaviorError, BehaviorResult};

/// Lowest value any trait can take.
pub const TRAIT_MIN: f64 = 0.3;
/// Highest value any trait can take.
pub const TRAIT_MAX: f64 = 1.0;

/// Four independent traits that bias behavior selection.
///
/// Every trait lies in `[TRAIT_MIN, TRAIT_MAX]`.  Fields are private so the
/// range can only be established through [`Personality::new`] or
/// [`Personality::random`].
///
/// `friendliness` is rolled and persisted with the others but no current
/// behavior reads it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Personality {
    playfulness:  f64,
    laziness:     f64,
    curiosity:    f64,
    friendliness: f64,
}

impl Personality {
    /// Build from explicit trait values, rejecting anything outside
    /// `[TRAIT_MIN, TRAIT_MAX]` or non-finite.
    pub fn new(
        playfulness:  f64,
        laziness:     f64,
        curiosity:    f64,
        friendliness: f64,
    ) -> BehaviorResult<Self> {
        let check = |field: &'static str, v: f64| check_range(field, v, TRAIT_MIN, TRAIT_MAX)
            .map_err(BehaviorError::Personality);
        Ok(Self {
            playfulness:  check("playfulness", playfulness)?,
            laziness:     check("laziness", laziness)?,
            curiosity:    check("curiosity", curiosity)?,
            friendliness: check("friendliness", friendliness)?,
        })
    }

    /// Roll every trait uniformly in `[TRAIT_MIN, TRAIT_MAX]`.
    pub fn random(rng: &mut PetRng) -> Self {
        Self {
            playfulness:  rng.uniform(TRAIT_MIN, TRAIT_MAX),
            laziness:     rng.uniform(TRAIT_MIN, TRAIT_MAX),
            curiosity:    rng.uniform(TRAIT_MIN, TRAIT_MAX),
            friendliness: rng.uniform(TRAIT_MIN, TRAIT_MAX),
        }
    }

    #[inline]
    pub fn playfulness(&self) -> f64 {
        self.playfulness
    }

    #[inline]
    pub fn laziness(&self) -> f64 {
        self.laziness
    }

    #[inline]
    pub fn curiosity(&self) -> f64 {
        self.curiosity
    }

    #[inline]
    pub fn friendliness(&self) -> f64 {
        self.friendliness
    }
}
