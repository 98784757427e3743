//! Side effects requested by the behavior engine.

use std::fmt;

use crate::Behavior;

/// Why a re-selection landed where it did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwitchReason {
    /// Energy fell below the exhaustion threshold.
    Exhausted,
    /// Hunger rose above the starvation threshold.
    Starving,
    /// Curiosity won the roll and the cursor became the target.
    CursorSpotted,
    /// Weighted lottery.
    Whim,
}

impl SwitchReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            SwitchReason::Exhausted     => "exhausted",
            SwitchReason::Starving      => "starving",
            SwitchReason::CursorSpotted => "cursor",
            SwitchReason::Whim          => "whim",
        }
    }
}

impl fmt::Display for SwitchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action the host must carry out after [`BehaviorEngine::update`][crate::BehaviorEngine::update].
///
/// The engine has already mutated its own state; intents only describe
/// effects outside it.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// A re-selection happened.  `from` may equal `to`: the lottery can
    /// pick the running behavior again, which still restarts its dwell.
    ChangeBehavior {
        from:   Behavior,
        to:     Behavior,
        reason: SwitchReason,
    },

    /// Persist the current needs.  Best effort; failures must not reach the
    /// tick loop.
    SaveNeeds,
}
