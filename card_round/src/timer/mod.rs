//! Decision and inactivity timers.
//!
//! Both timers are advanced by explicit `tick(dt)` calls from a single
//! scheduling domain; neither owns a clock or a thread.
//!
//! - [`SessionTimer`]: counts the decision window down and expires once
//! - [`WarningTimer`]: counts inactivity up to a kick threshold

pub mod session;
pub mod warning;

pub use session::{DEFAULT_DECISION, DEFAULT_DECISION_WARNING, SessionTimer};
pub use warning::{DEFAULT_KICK, DEFAULT_KICK_WARNING, WarningSignal, WarningTimer};

use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Paused,
    Expired,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Expired => "expired",
        };
        write!(f, "{repr}")
    }
}

/// Whole seconds shown to the player, rounded up.
pub(crate) fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
