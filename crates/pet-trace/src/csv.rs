//! CSV trace backend.
//!
//! Creates two files in the configured directory:
//! - `ticks.csv`
//! - `behavior_changes.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{BehaviorChangeRow, TickRow, TraceResult};

pub const TICKS_FILE: &str = "ticks.csv";
pub const CHANGES_FILE: &str = "behavior_changes.csv";

/// Writes a companion trace to two CSV files.
pub struct CsvTraceWriter {
    ticks:    Writer<File>,
    changes:  Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        fs::create_dir_all(dir)?;

        let mut ticks = Writer::from_path(dir.join(TICKS_FILE))?;
        ticks.write_record([
            "tick", "time", "behavior", "x", "y", "vx", "vy", "facing",
            "energy", "hunger", "happiness",
        ])?;

        let mut changes = Writer::from_path(dir.join(CHANGES_FILE))?;
        changes.write_record(["tick", "time", "from", "to", "reason"])?;

        tracing::debug!(dir = %dir.display(), "trace files opened");
        Ok(Self { ticks, changes, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_tick(&mut self, row: &TickRow) -> TraceResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.time),
            row.behavior.to_string(),
            format!("{:.3}", row.x),
            format!("{:.3}", row.y),
            format!("{:.4}", row.vx),
            format!("{:.4}", row.vy),
            row.facing.to_string(),
            format!("{:.3}", row.energy),
            format!("{:.3}", row.hunger),
            format!("{:.3}", row.happiness),
        ])?;
        Ok(())
    }

    fn write_change(&mut self, row: &BehaviorChangeRow) -> TraceResult<()> {
        self.changes.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.time),
            row.from.to_string(),
            row.to.to_string(),
            row.reason.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.changes.flush()?;
        Ok(())
    }
}
