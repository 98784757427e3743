//! Fluent builder for constructing a [`Companion`].

use pet_behavior::{Behavior, BehaviorEngine, EngineConfig, NeedsState, Personality};
use pet_core::{PetConfig, PetRng, Point, Timestamp};
use pet_motion::{MotionConfig, MotionIntegrator, PhysicsState};
use pet_store::{NoSnapshots, SnapshotSink, StateStore};

use crate::{AnimationState, Companion, SimResult};

/// Fluent builder for [`Companion<S>`].
///
/// # Required inputs
///
/// - [`PetConfig`]: screen, frame rate, snapshot chance, seed, …
/// - `start`: timestamp of tick 0; also the "now" used for fresh needs
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                      |
/// |------------------------|----------------------------------------------|
/// | `.personality(p)`      | `Personality::random` from the seeded RNG    |
/// | `.needs(n)`            | `NeedsState::fresh(start)`                   |
/// | `.restore_from(store)` | Sets both of the above from disk             |
/// | `.position(p)`         | Random whole-pixel spot on screen            |
/// | `.behavior(b)`         | `Behavior::Idle`                             |
/// | `.motion(m)`           | `MotionConfig::default()`                    |
/// | `.sink(s)`             | `NoSnapshots`                                |
///
/// # Example
///
/// ```rust,ignore
/// let store = StateStore::new(&config.data_dir);
/// let mut pet = CompanionBuilder::new(config, Timestamp::now())
///     .restore_from(&store)
///     .sink(BackgroundSnapshots::spawn(store)?)
///     .build()?;
/// ```
pub struct CompanionBuilder<S: SnapshotSink = NoSnapshots> {
    config:      PetConfig,
    start:       Timestamp,
    rng:         PetRng,
    personality: Option<Personality>,
    needs:       Option<NeedsState>,
    position:    Option<Point>,
    behavior:    Behavior,
    motion:      MotionConfig,
    sink:        S,
}

impl CompanionBuilder<NoSnapshots> {
    /// Create a builder.  The RNG is seeded from `config.seed` (or entropy).
    pub fn new(config: PetConfig, start: Timestamp) -> Self {
        let rng = PetRng::from_seed_or_entropy(config.seed);
        Self {
            config,
            start,
            rng,
            personality: None,
            needs:       None,
            position:    None,
            behavior:    Behavior::default(),
            motion:      MotionConfig::default(),
            sink:        NoSnapshots,
        }
    }
}

impl<S: SnapshotSink> CompanionBuilder<S> {
    pub fn personality(mut self, personality: Personality) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn needs(mut self, needs: NeedsState) -> Self {
        self.needs = Some(needs);
        self
    }

    /// Load personality and needs from `store`.
    ///
    /// A missing or unreadable personality is replaced by a random one and
    /// written back; unreadable needs fall back to fresh defaults.  Neither
    /// failure stops the build.
    pub fn restore_from(mut self, store: &StateStore) -> Self {
        self.personality = Some(store.load_or_create_personality(&mut self.rng));
        self.needs = Some(store.load_needs_or_default(self.start));
        self
    }

    /// Initial top-left corner of the sprite.  Clamped on build.
    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Replace the RNG, e.g. to share one already used for loading.
    pub fn rng(mut self, rng: PetRng) -> Self {
        self.rng = rng;
        self
    }

    /// Route needs snapshots to `sink`.
    pub fn sink<T: SnapshotSink>(self, sink: T) -> CompanionBuilder<T> {
        CompanionBuilder {
            config:      self.config,
            start:       self.start,
            rng:         self.rng,
            personality: self.personality,
            needs:       self.needs,
            position:    self.position,
            behavior:    self.behavior,
            motion:      self.motion,
            sink,
        }
    }

    /// Validate inputs, resolve defaults, and return a ready-to-tick
    /// [`Companion`].
    pub fn build(self) -> SimResult<Companion<S>> {
        self.config.validate()?;
        let mut rng = self.rng;

        let personality = self.personality.unwrap_or_else(|| Personality::random(&mut rng));
        let needs = self.needs.unwrap_or_else(|| NeedsState::fresh(self.start));

        let physics = match self.position {
            Some(p) => PhysicsState::at_rest(p),
            None    => PhysicsState::spawn(&self.config.screen, &mut rng),
        };
        let motion = MotionIntegrator::new(physics, self.config.screen, self.motion)?;

        let engine = BehaviorEngine::new(personality, needs, EngineConfig::from(&self.config))
            .with_behavior(self.behavior);

        tracing::info!(
            playfulness = personality.playfulness(),
            laziness = personality.laziness(),
            curiosity = personality.curiosity(),
            friendliness = personality.friendliness(),
            position = %motion.state().position,
            "companion ready"
        );

        Ok(Companion {
            clock:     self.config.make_clock(self.start),
            config:    self.config,
            engine,
            motion,
            animation: AnimationState::default(),
            rng,
            sink:      self.sink,
        })
    }
}
