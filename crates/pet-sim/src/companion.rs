//! The `Companion` struct and its tick loop.

use pet_behavior::{Behavior, BehaviorEngine, EngineConfig, Intent};
use pet_core::{FrameClock, PetConfig, PetRng, Point, ScreenBounds, Tick, Timestamp};
use pet_motion::{MotionIntegrator, PhysicsState};
use pet_store::{NeedsRecord, SnapshotSink};

use crate::{AnimationState, CompanionObserver, Frame, SimError, SimResult};

/// One desktop cat: behavior engine, motion integrator, and animation phases,
/// plus the sink its needs snapshots go to.
///
/// Each [`tick`](Self::tick) runs five steps in a fixed order:
///
/// 1. **Update**: [`BehaviorEngine::update`] decays needs and may re-select
///    a behavior.
/// 2. **Apply**: `ChangeBehavior` is reported to the observer, `SaveNeeds`
///    hands a snapshot to the sink without waiting for it.
/// 3. **Step**: [`MotionIntegrator::step`] moves the sprite toward the
///    current target.
/// 4. **Feedback**: on arrival the engine clears its target.
/// 5. **Animate**: cosmetic phases advance and a [`Frame`] is produced.
///
/// Create via [`CompanionBuilder`][crate::CompanionBuilder].
pub struct Companion<S: SnapshotSink> {
    /// Configuration the companion was built with.
    pub config: PetConfig,

    /// Frame counter; maps ticks to timestamps for [`run_ticks`](Self::run_ticks).
    pub clock: FrameClock,

    /// Personality, needs, and the current behavior.
    pub engine: BehaviorEngine,

    /// Position, velocity, and facing.
    pub motion: MotionIntegrator,

    /// Cosmetic tail / ear / breath / blink phases.
    pub animation: AnimationState,

    /// Single RNG shared by the engine and the animation.
    pub rng: PetRng,

    /// Destination for needs snapshots.
    pub sink: S,
}

impl<S: SnapshotSink> Companion<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run one frame at wall-clock `now`.
    ///
    /// `cursor` is the pointer position if it is known this frame.  Returns
    /// the finished frame, which is also passed to
    /// [`CompanionObserver::on_tick_end`].
    pub fn tick<O: CompanionObserver>(
        &mut self,
        now:      Timestamp,
        cursor:   Option<Point>,
        observer: &mut O,
    ) -> Frame {
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);

        // ── ① update + ② apply ────────────────────────────────────────────
        for intent in self.engine.update(now, cursor, &mut self.rng) {
            match intent {
                Intent::ChangeBehavior { from, to, reason } => {
                    observer.on_behavior_change(tick, now, from, to, reason);
                }
                Intent::SaveNeeds => {
                    self.sink.submit(NeedsRecord::from(&self.engine.needs));
                }
            }
        }

        // ── ③ step + ④ feedback ───────────────────────────────────────────
        let outcome = self.motion.step(
            self.config.physics_dt,
            self.engine.behavior(),
            self.engine.needs.target,
        );
        if outcome.arrived {
            self.engine.target_reached();
            observer.on_arrival(tick, outcome.state.position);
        }

        // ── ⑤ animate ─────────────────────────────────────────────────────
        self.animation.advance(&mut self.rng);

        let frame = self.frame(now);
        observer.on_tick_end(&frame);
        self.clock.advance();
        frame
    }

    /// Run exactly `n` frames on the fixed frame clock.
    ///
    /// `cursor` is asked for the pointer position at each frame.  Useful for
    /// headless runs and tests, where wall time must not leak in.
    pub fn run_ticks<O, C>(&mut self, n: u64, mut cursor: C, observer: &mut O)
    where
        O: CompanionObserver,
        C: FnMut(Tick, Timestamp) -> Option<Point>,
    {
        for _ in 0..n {
            let now = self.clock.now();
            let pointer = cursor(self.clock.current_tick, now);
            self.tick(now, pointer, observer);
        }
    }

    /// Flush the current needs synchronously and notify the observer.
    ///
    /// Safe to call more than once; each call writes the latest needs.
    pub fn shutdown<O: CompanionObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let record = NeedsRecord::from(&self.engine.needs);
        let result = self.sink.finish(record);
        match &result {
            Ok(()) => tracing::info!(tick = %self.clock.current_tick, "needs saved on shutdown"),
            Err(e) => tracing::error!(error = %e, "needs could not be saved on shutdown"),
        }
        observer.on_shutdown(self.clock.current_tick);
        result.map_err(SimError::from)
    }

    // ── User input ────────────────────────────────────────────────────────

    /// Click on the pet.
    pub fn pet(&mut self) {
        self.engine.pet();
    }

    /// "Feed" menu action.
    pub fn feed(&mut self) {
        self.engine.feed();
    }

    /// Pointer moved over the pet window.  Retargets the hunt if hunting.
    pub fn cursor_moved(&mut self, cursor: Point) {
        self.engine.cursor_moved(cursor);
    }

    /// The user dragged the window to `position` (top-left corner).
    pub fn drag_to(&mut self, position: Point) {
        self.motion.place(position);
    }

    /// The display changed size.  Re-clamps the sprite and rescales wander
    /// targets.
    pub fn set_screen(&mut self, screen: ScreenBounds) -> SimResult<()> {
        let mut config = self.config.clone();
        config.screen = screen;
        config.validate()?;
        self.engine.set_config(EngineConfig::from(&config))?;
        self.motion.set_bounds(screen);
        self.config = config;
        Ok(())
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn behavior(&self) -> Behavior {
        self.engine.behavior()
    }

    #[inline]
    pub fn physics(&self) -> &PhysicsState {
        self.motion.state()
    }

    /// Build the frame a renderer would draw right now.
    pub fn frame(&self, now: Timestamp) -> Frame {
        let physics = *self.motion.state();
        let behavior = self.engine.behavior();
        let needs = &self.engine.needs;
        Frame {
            tick: self.clock.current_tick,
            now,
            behavior,
            physics,
            target:    needs.target,
            energy:    needs.energy,
            hunger:    needs.hunger,
            happiness: needs.happiness,
            pose:      self.animation.pose(behavior, physics.facing),
        }
    }
}
