//! `pet-core`: foundational types for the `deskcat` desktop companion.
//!
//! This crate is a dependency of every other `pet-*` crate.  It has no
//! `pet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, `ScreenBounds`                               |
//! | [`time`]        | `Timestamp`, `Tick`, `FrameClock`                     |
//! | [`rng`]         | `PetRng`                                              |
//! | [`config`]      | `PetConfig`                                           |
//! | [`error`]       | `PetError`, `PetResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; required to read `PetConfig` from TOML. |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PetConfig;
pub use error::{PetError, PetResult};
pub use geo::{Point, ScreenBounds};
pub use rng::PetRng;
pub use time::{FrameClock, Tick, Timestamp};
