//! The `TraceWriter` trait implemented by trace backends.

use crate::{BehaviorChangeRow, TickRow, TraceResult};

/// Destination for trace rows.
///
/// Errors are returned to the caller; [`TraceObserver`][crate::TraceObserver]
/// stores the first one for [`take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    fn write_tick(&mut self, row: &TickRow) -> TraceResult<()>;

    fn write_change(&mut self, row: &BehaviorChangeRow) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
