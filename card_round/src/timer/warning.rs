//! Inactivity kick timer.

use super::{TimerState, ceil_secs};
use std::time::Duration;

/// Default inactivity limit before a forced exit (90 seconds)
pub const DEFAULT_KICK: Duration = Duration::from_secs(90);

/// Remaining time at which the kick warning is shown (15 seconds)
pub const DEFAULT_KICK_WARNING: Duration = Duration::from_secs(15);

/// Signals raised by [`WarningTimer::tick`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WarningSignal {
    /// Entered the warning window with `remaining` left
    WarningEntered { remaining: Duration },
    /// Threshold reached; the player must be removed from the session
    Kick,
}

/// Counts inactivity up from zero. Kicking is terminal: once the kick has
/// fired, or the timer was stopped, `reset_timer` does nothing.
#[derive(Clone, Debug)]
pub struct WarningTimer {
    threshold: Duration,
    warning_window: Duration,
    elapsed: Duration,
    state: TimerState,
    warning: bool,
    kicking: bool,
}

impl Default for WarningTimer {
    fn default() -> Self {
        Self::new(DEFAULT_KICK, DEFAULT_KICK_WARNING)
    }
}

impl WarningTimer {
    pub fn new(threshold: Duration, warning_window: Duration) -> Self {
        Self {
            threshold,
            warning_window,
            elapsed: Duration::ZERO,
            state: TimerState::Idle,
            warning: false,
            kicking: false,
        }
    }

    /// Begin counting from zero. Ignored once kicking.
    pub fn start(&mut self) {
        if self.kicking {
            return;
        }
        self.elapsed = Duration::ZERO;
        self.warning = false;
        self.state = TimerState::Running;
        log::debug!("Kick timer started: {:?}", self.threshold);
    }

    /// Advance by `dt`. When one tick crosses both the warning window and
    /// the threshold, only `Kick` is returned.
    pub fn tick(&mut self, dt: Duration) -> Option<WarningSignal> {
        if self.kicking || self.state != TimerState::Running {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt);

        let mut signal = None;
        if !self.warning && self.remaining() <= self.warning_window {
            self.warning = true;
            log::info!("Kick warning: {}s left", self.display_seconds());
            signal = Some(WarningSignal::WarningEntered {
                remaining: self.remaining(),
            });
        }

        if self.elapsed >= self.threshold {
            self.elapsed = self.threshold;
            self.state = TimerState::Expired;
            self.kicking = true;
            log::info!("Kick threshold of {:?} reached", self.threshold);
            signal = Some(WarningSignal::Kick);
        }

        signal
    }

    /// Clear elapsed time and the warning sub-state.
    pub fn reset_timer(&mut self) -> bool {
        if self.kicking || !matches!(self.state, TimerState::Running | TimerState::Paused) {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.warning = false;
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

    /// Session is over by other means; never kick from here on.
    pub fn stop(&mut self) {
        self.kicking = true;
        self.warning = false;
        self.state = TimerState::Idle;
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn remaining(&self) -> Duration {
        self.threshold.saturating_sub(self.elapsed)
    }

    pub fn display_seconds(&self) -> u64 {
        ceil_secs(self.remaining())
    }

    pub fn in_warning(&self) -> bool {
        self.warning
    }

    /// Whether the kick signal has fired.
    pub fn has_kicked(&self) -> bool {
        self.state == TimerState::Expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn started() -> WarningTimer {
        let mut timer = WarningTimer::default();
        timer.start();
        timer
    }

    #[test]
    fn test_idle_does_not_count() {
        let mut timer = WarningTimer::default();
        assert_eq!(timer.tick(Duration::from_secs(100)), None);
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_kick_fires_once() {
        let mut timer = started();
        let mut kicks = 0;
        for _ in 0..90 {
            if timer.tick(SECOND) == Some(WarningSignal::Kick) {
                kicks += 1;
            }
        }
        assert_eq!(kicks, 1);
        assert!(timer.has_kicked());
        for _ in 0..10 {
            assert_eq!(timer.tick(SECOND), None);
        }
    }

    #[test]
    fn test_reset_after_kick_is_noop() {
        let mut timer = started();
        for _ in 0..90 {
            timer.tick(SECOND);
        }
        assert!(!timer.reset_timer());
        assert!(!timer.reset_timer());
        assert_eq!(timer.elapsed(), Duration::from_secs(90));
        assert_eq!(timer.state(), TimerState::Expired);
    }

    #[test]
    fn test_warning_entered_at_window() {
        let mut timer = started();
        assert_eq!(timer.tick(Duration::from_secs(74)), None);
        assert!(!timer.in_warning());
        assert_eq!(
            timer.tick(SECOND),
            Some(WarningSignal::WarningEntered {
                remaining: Duration::from_secs(15)
            })
        );
        assert!(timer.in_warning());
        assert_eq!(timer.tick(SECOND), None);
    }

    #[test]
    fn test_reset_clears_warning() {
        let mut timer = started();
        timer.tick(Duration::from_secs(80));
        assert!(timer.in_warning());
        assert!(timer.reset_timer());
        assert!(!timer.in_warning());
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.display_seconds(), 90);
    }

    #[test]
    fn test_single_large_tick_kicks() {
        let mut timer = started();
        assert_eq!(timer.tick(Duration::from_secs(200)), Some(WarningSignal::Kick));
        assert!(timer.in_warning());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_stop_disables_kick_and_reset() {
        let mut timer = started();
        timer.tick(Duration::from_secs(80));
        timer.stop();
        assert!(!timer.in_warning());
        assert_eq!(timer.tick(Duration::from_secs(60)), None);
        assert!(!timer.reset_timer());
        assert!(!timer.has_kicked());
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut timer = started();
        timer.tick(Duration::from_secs(10));
        timer.pause();
        timer.tick(Duration::from_secs(100));
        assert_eq!(timer.elapsed(), Duration::from_secs(10));
        assert!(timer.reset_timer());
        timer.resume();
        timer.tick(SECOND);
        assert_eq!(timer.elapsed(), SECOND);
    }
}
