//! `pet-behavior`: needs simulation and behavior selection.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                      |
//! |------------------|---------------------------------------------------------------|
//! | [`personality`]  | `Personality`: four static traits in [0.3, 1.0]               |
//! | [`needs`]        | `NeedsState`: energy / hunger / happiness, target, timers     |
//! | [`behavior`]     | `Behavior` enum + static weight / dwell table                 |
//! | [`intent`]       | `Intent`: what the host should do after an update             |
//! | [`engine`]       | `BehaviorEngine`: decay, dwell check, re-selection            |
//! | [`error`]        | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Update cycle
//!
//! Each frame the host calls [`BehaviorEngine::update`] with the current
//! timestamp and (optionally) the cursor position:
//!
//! 1. Needs decay by the elapsed time since the previous update.
//! 2. If the current behavior has outlasted a freshly drawn dwell threshold,
//!    a new behavior is chosen: forced by low energy or high hunger, drawn
//!    toward the cursor by curiosity, or picked by weighted lottery.
//! 3. The engine returns [`Intent`]s describing side effects the host must
//!    carry out (a behavior switch to report, a needs snapshot to save).
//!
//! The engine never performs I/O and never reads the clock.

pub mod behavior;
pub mod engine;
pub mod error;
pub mod intent;
pub mod needs;
pub mod personality;

#[cfg(test)]
mod tests;

pub use behavior::{Behavior, BehaviorProfile};
pub use engine::{BehaviorEngine, EngineConfig};
pub use error::{BehaviorError, BehaviorResult};
pub use intent::{Intent, SwitchReason};
pub use needs::NeedsState;
pub use personality::Personality;
