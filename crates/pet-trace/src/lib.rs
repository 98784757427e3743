//! `pet-trace`: CSV traces of a companion run.
//!
//! | File                   | One row per                                   |
//! |------------------------|-----------------------------------------------|
//! | `ticks.csv`            | recorded tick: behavior, physics, needs       |
//! | `behavior_changes.csv` | behavior re-selection, with its reason        |
//!
//! Writers implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `pet_sim::CompanionObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pet_trace::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! pet.run_ticks(1200, |_, _| None, &mut obs);
//! pet.shutdown(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("trace error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::{CsvTraceWriter, CHANGES_FILE, TICKS_FILE};
pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{BehaviorChangeRow, TickRow};
pub use writer::TraceWriter;
