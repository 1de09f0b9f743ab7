//! Decision countdown.

use super::{TimerState, ceil_secs};
use std::time::Duration;

/// Default decision window (30 seconds)
pub const DEFAULT_DECISION: Duration = Duration::from_secs(30);

/// Remaining time at which the "select a card" prompt appears (10 seconds)
pub const DEFAULT_DECISION_WARNING: Duration = Duration::from_secs(10);

/// Countdown bounding one decision.
///
/// `reset` only works while `Running`: acting behind a blocking overlay must
/// not bank extra time, and an expired timer must not re-arm itself.
#[derive(Clone, Debug)]
pub struct SessionTimer {
    duration: Duration,
    remaining: Duration,
    warning_at: Duration,
    state: TimerState,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DECISION)
    }
}

impl SessionTimer {
    /// Idle timer that will count down from `duration` once started.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: Duration::ZERO,
            warning_at: DEFAULT_DECISION_WARNING,
            state: TimerState::Idle,
        }
    }

    #[must_use]
    pub fn with_warning_at(mut self, warning_at: Duration) -> Self {
        self.warning_at = warning_at;
        self
    }

    pub fn start(&mut self, duration: Duration) {
        self.duration = duration;
        self.restart();
    }

    /// Start again from the configured duration. Clears `Expired`.
    pub fn restart(&mut self) {
        self.remaining = self.duration;
        self.state = TimerState::Running;
        log::debug!("Session timer started: {:?}", self.duration);
    }

    /// Advance by `dt`. Returns `true` exactly once, on the tick that
    /// takes the timer from `Running` to `Expired`.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.state = TimerState::Expired;
            log::debug!("Session timer expired");
            return true;
        }

        false
    }

    /// Refill to the configured duration. No-op unless `Running`.
    pub fn reset(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.remaining = self.duration;
        true
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == TimerState::Paused {
            self.state = TimerState::Running;
        }
    }

    /// Force `Idle`. Nothing can expire until the next start.
    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
        self.remaining = Duration::ZERO;
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    /// Countdown shown to the player, in whole seconds rounded up.
    pub fn display_seconds(&self) -> u64 {
        ceil_secs(self.remaining)
    }

    /// Whether the auto-select prompt should be visible.
    pub fn warning_active(&self) -> bool {
        matches!(self.state, TimerState::Running | TimerState::Paused)
            && !self.remaining.is_zero()
            && self.remaining <= self.warning_at
    }
}
