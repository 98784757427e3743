//! The behavior engine: need decay, dwell check, and re-selection.

use rand::distributions::{Distribution, WeightedIndex};

use pet_core::{PetConfig, PetRng, Point, ScreenBounds, Timestamp};

use crate::{Behavior, BehaviorError, BehaviorResult, Intent, NeedsState, Personality, SwitchReason};

/// Below this energy the pet always falls asleep on re-selection.
pub const EXHAUSTED_ENERGY: f64 = 20.0;
/// Above this hunger the pet always goes hunting on re-selection.
pub const STARVING_HUNGER: f64 = 80.0;

/// Tunables the engine reads from the companion configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Area wander targets are drawn from.  Targets span the full screen
    /// (`[0, width] × [0, height]`); the motion integrator does the clamping.
    pub screen: ScreenBounds,
    /// Per-update probability of emitting [`Intent::SaveNeeds`].
    pub snapshot_chance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { screen: ScreenBounds::default(), snapshot_chance: 0.01 }
    }
}

impl From<&PetConfig> for EngineConfig {
    fn from(cfg: &PetConfig) -> Self {
        Self { screen: cfg.screen, snapshot_chance: cfg.snapshot_chance }
    }
}

/// Owns the personality, the needs, and the current behavior.
#[derive(Clone, Debug)]
pub struct BehaviorEngine {
    pub personality: Personality,
    pub needs:       NeedsState,
    behavior:        Behavior,
    config:          EngineConfig,
}

impl BehaviorEngine {
    /// Start in [`Behavior::Idle`].
    pub fn new(personality: Personality, needs: NeedsState, config: EngineConfig) -> Self {
        Self { personality, needs, behavior: Behavior::Idle, config }
    }

    /// Start in an explicit behavior, e.g. to resume a scripted scene.
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[inline]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration, validating the snapshot probability.
    pub fn set_config(&mut self, config: EngineConfig) -> BehaviorResult<()> {
        if !(0.0..=1.0).contains(&config.snapshot_chance) {
            return Err(BehaviorError::Config(format!(
                "snapshot_chance must be in [0, 1], got {}",
                config.snapshot_chance
            )));
        }
        self.config = config;
        Ok(())
    }

    /// Advance the simulation to `now`.
    ///
    /// Decays needs, re-selects a behavior once the current one has
    /// outlasted a dwell threshold drawn fresh on this call, and returns the
    /// side effects the host must perform.
    pub fn update(
        &mut self,
        now:    Timestamp,
        cursor: Option<Point>,
        rng:    &mut PetRng,
    ) -> Vec<Intent> {
        let mut intents = Vec::new();

        let dt = now.since(self.needs.last_update);
        self.needs.decay(dt, self.personality.laziness());

        // The threshold is re-drawn on every call rather than fixed on entry.
        let dwell = self.behavior.sample_dwell(rng);
        if now.since(self.needs.state_change) > dwell {
            let from = self.behavior;
            let (to, reason) = self.choose_next(cursor, rng);
            self.behavior = to;
            self.needs.state_change = now;

            tracing::debug!(
                from = %from,
                to = %to,
                reason = %reason,
                energy = self.needs.energy,
                hunger = self.needs.hunger,
                target = ?self.needs.target,
                "behavior re-selected"
            );
            intents.push(Intent::ChangeBehavior { from, to, reason });
        }

        self.needs.last_update = now;

        if rng.gen_bool(self.config.snapshot_chance) {
            intents.push(Intent::SaveNeeds);
        }
        intents
    }

    /// Pick the next behavior in strict priority order, updating the target
    /// where the chosen branch calls for it.
    fn choose_next(&mut self, cursor: Option<Point>, rng: &mut PetRng) -> (Behavior, SwitchReason) {
        if self.needs.energy < EXHAUSTED_ENERGY {
            return (Behavior::Sleeping, SwitchReason::Exhausted);
        }
        if self.needs.hunger > STARVING_HUNGER {
            // Any previous target is left in place.
            return (Behavior::Hunting, SwitchReason::Starving);
        }
        if let Some(cursor) = cursor {
            if rng.random::<f64>() < self.personality.curiosity()
                && self.behavior != Behavior::Sleeping
            {
                self.needs.target = Some(cursor);
                return (Behavior::Hunting, SwitchReason::CursorSpotted);
            }
        }

        let next = self.lottery(rng);
        if next.seeks_target() {
            self.needs.target = Some(self.wander_target(rng));
        }
        (next, SwitchReason::Whim)
    }

    /// Weighted draw over [`Behavior::ALL`].
    fn lottery(&self, rng: &mut PetRng) -> Behavior {
        let weights = Behavior::ALL.map(|b| b.weight(&self.personality, &self.needs));
        match WeightedIndex::new(weights) {
            Ok(dist) => Behavior::ALL[dist.sample(rng.inner())],
            // Idle's weight is a positive constant, so this only happens if a
            // caller wrote NaN into the needs.
            Err(e) => {
                tracing::warn!(error = %e, ?weights, "behavior weights unusable, idling");
                Behavior::Idle
            }
        }
    }

    /// Uniform point over the full screen.
    fn wander_target(&self, rng: &mut PetRng) -> Point {
        let s = &self.config.screen;
        Point::new(rng.uniform(0.0, s.width), rng.uniform(0.0, s.height))
    }

    // ── Feedback and input ────────────────────────────────────────────────

    /// The motion integrator reached the target.
    pub fn target_reached(&mut self) {
        if let Some(target) = self.needs.target.take() {
            tracing::debug!(%target, behavior = %self.behavior, "target reached");
        }
    }

    /// Cursor moved over the pet.  While hunting, the cursor becomes the target.
    pub fn cursor_moved(&mut self, cursor: Point) {
        if self.behavior == Behavior::Hunting {
            self.needs.target = Some(cursor);
        }
    }

    /// The user stroked the pet.
    pub fn pet(&mut self) {
        self.needs.pet();
        tracing::info!(happiness = self.needs.happiness, "petted");
    }

    /// The user fed the pet.
    pub fn feed(&mut self) {
        self.needs.feed();
        tracing::info!(hunger = self.needs.hunger, "fed");
    }
}
