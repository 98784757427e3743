//! `TraceObserver<W>`: bridges `CompanionObserver` to a `TraceWriter`.

use pet_behavior::{Behavior, SwitchReason};
use pet_core::{Tick, Timestamp};
use pet_sim::{CompanionObserver, Frame};

use crate::row::{BehaviorChangeRow, TickRow};
use crate::writer::TraceWriter;
use crate::{TraceError, TraceResult};

/// A [`CompanionObserver`] that records every behavior change and every
/// `interval`-th tick to any [`TraceWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    interval:   u64,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    /// Record every tick.
    pub fn new(writer: W) -> Self {
        Self::every(writer, 1)
    }

    /// Record ticks whose number is a multiple of `interval` (0 = no tick
    /// rows, behavior changes only).
    pub fn every(writer: W, interval: u64) -> Self {
        Self { writer, interval, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect it after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "trace write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> CompanionObserver for TraceObserver<W> {
    fn on_behavior_change(
        &mut self,
        tick:   Tick,
        now:    Timestamp,
        from:   Behavior,
        to:     Behavior,
        reason: SwitchReason,
    ) {
        let row = BehaviorChangeRow { tick: tick.0, time: now.0, from, to, reason };
        let result = self.writer.write_change(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, frame: &Frame) {
        if self.interval > 0 && frame.tick.0.is_multiple_of(self.interval) {
            let result = self.writer.write_tick(&TickRow::from(frame));
            self.store_err(result);
        }
    }

    fn on_shutdown(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
