//! `pet-store`: JSON snapshots of the pet's personality and needs.
//!
//! Two independent documents live in the configured data directory:
//!
//! | File                    | Record               | Written                         |
//! |-------------------------|----------------------|---------------------------------|
//! | `cat_personality.json`  | [`PersonalityRecord`]| when a personality is created   |
//! | `cat_state.json`        | [`NeedsRecord`]      | opportunistically and on exit   |
//!
//! Loading never fails from the caller's point of view: a missing,
//! unreadable, malformed or out-of-range document is logged and replaced by
//! defaults (a fresh random personality, or fresh needs).  Writes go to a
//! temporary file that is renamed over the target, so a crash mid-write
//! leaves the previous snapshot intact.
//!
//! Periodic saves go through a [`SnapshotSink`]; [`BackgroundSnapshots`]
//! performs them on a dedicated thread so the tick loop never waits on
//! the disk.

pub mod error;
pub mod record;
pub mod snapshot;
pub mod store;


pub use error::{StoreError, StoreResult};
pub use record::{NeedsRecord, PersonalityRecord};
pub use snapshot::{BackgroundSnapshots, NoSnapshots, SnapshotSink};
pub use store::{NEEDS_FILE, PERSONALITY_FILE, StateStore};
