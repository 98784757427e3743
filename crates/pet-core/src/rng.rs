//! Random number source for the pet.
//!
//! Every random decision in the simulation (personality rolls, dwell
//! thresholds, behavior draws, wander targets, blink timing) goes through a
//! single `PetRng` owned by the host loop and passed down by `&mut`.  Seeding
//! it makes a whole run reproducible, which is what the tests rely on.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Owned, non-`Sync` RNG handle.
pub struct PetRng(SmallRng);

impl PetRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        PetRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, the normal choice for an interactive run.
    pub fn from_entropy() -> Self {
        PetRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy otherwise.
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `WeightedIndex`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform `f64` in `[min, max]`; returns `min` for an empty, inverted or
    /// non-finite range.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min.is_finite() && max.is_finite() && max > min {
            self.0.gen_range(min..=max)
        } else {
            min
        }
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
