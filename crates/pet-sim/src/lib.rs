//! `pet-sim`: the host-side tick driver for the deskcat companion.
//!
//! # Tick loop
//!
//! ```text
//! every frame (default 50 ms):
//!   ① Update  : BehaviorEngine::update(now, cursor): decay needs,
//!                maybe re-select a behavior.
//!   ② Apply   : ChangeBehavior → observer hook
//!                SaveNeeds      → SnapshotSink::submit (fire-and-forget)
//!   ③ Step    : MotionIntegrator::step(dt, behavior, target)
//!   ④ Feedback: arrived → BehaviorEngine::target_reached()
//!   ⑤ Animate : advance tail / ear / breath / blink phases
//!   ⑥ Frame   : hand a read-only Frame to the observer / renderer
//! ```
//!
//! Window creation, drawing and the tray icon live outside this crate; they
//! consume [`Frame`] and feed input back through [`Companion::pet`],
//! [`Companion::feed`], [`Companion::cursor_moved`] and
//! [`Companion::drag_to`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pet_core::{PetConfig, Timestamp};
//! use pet_sim::{CompanionBuilder, NoopObserver};
//! use pet_store::StateStore;
//!
//! let config = PetConfig::default();
//! let store = StateStore::new(&config.data_dir);
//! let mut pet = CompanionBuilder::new(config, Timestamp::now())
//!     .restore_from(&store)
//!     .build()?;
//! pet.run_ticks(200, |_, _| None, &mut NoopObserver);
//! pet.shutdown(&mut NoopObserver)?;
//! ```

pub mod animation;
pub mod builder;
pub mod companion;
pub mod error;
pub mod frame;
pub mod observer;


pub use animation::{AnimationState, Pose};
pub use builder::CompanionBuilder;
pub use companion::Companion;
pub use error::{SimError, SimResult};
pub use frame::Frame;
pub use observer::{CompanionObserver, NoopObserver};
