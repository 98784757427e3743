//! Companion observer trait for logging, tracing and rendering hooks.

use pet_behavior::{Behavior, SwitchReason};
use pet_core::{Point, Tick, Timestamp};

use crate::Frame;

/// Callbacks invoked by [`Companion`][crate::Companion] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: behavior logger
///
/// ```rust,ignore
/// struct Narrator;
///
/// impl CompanionObserver for Narrator {
///     fn on_behavior_change(&mut self, tick: Tick, _now: Timestamp,
///                           from: Behavior, to: Behavior, reason: SwitchReason) {
///         println!("{tick}: {from} -> {to} ({reason})");
///     }
/// }
/// ```
pub trait CompanionObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the behavior engine re-selected a behavior this tick.
    fn on_behavior_change(
        &mut self,
        _tick:   Tick,
        _now:    Timestamp,
        _from:   Behavior,
        _to:     Behavior,
        _reason: SwitchReason,
    ) {}

    /// Called when the pet reached its movement target this tick.
    fn on_arrival(&mut self, _tick: Tick, _position: Point) {}

    /// Called at the end of each tick with the finished frame.
    fn on_tick_end(&mut self, _frame: &Frame) {}

    /// Called once from [`Companion::shutdown`][crate::Companion::shutdown].
    fn on_shutdown(&mut self, _final_tick: Tick) {}
}

/// A [`CompanionObserver`] that does nothing.
pub struct NoopObserver;

impl CompanionObserver for NoopObserver {}
