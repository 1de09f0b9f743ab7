//! Fan-out of player activity to both timers.

use super::input::PlayerInput;
use crate::timer::{SessionTimer, WarningTimer};

/// Resets the decision countdown and the kick timer together.
///
/// Holds no timer itself: the round passes its own timers in, and each
/// timer's guards decide whether the reset applies.
#[derive(Clone, Debug, Default)]
pub struct ResetBroadcaster {
    resets: u64,
}

impl ResetBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The player did something. Never called for automatic picks.
    pub fn on_player_action(&mut self, session: &mut SessionTimer, warning: &mut WarningTimer) {
        let session_reset = session.reset();
        let warning_reset = warning.reset_timer();
        self.resets += 1;

        log::debug!(
            "Player action: session reset {}, kick timer reset {}",
            session_reset,
            warning_reset
        );
    }

    /// Filter raw input, then broadcast. Returns whether the input counted.
    pub fn on_input(
        &mut self,
        input: &PlayerInput,
        session: &mut SessionTimer,
        warning: &mut WarningTimer,
    ) -> bool {
        if !input.qualifies() {
            return false;
        }
        self.on_player_action(session, warning);
        true
    }

    /// Number of broadcasts so far.
    pub fn resets(&self) -> u64 {
        self.resets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::input::Key;
    use crate::timer::TimerState;
    use std::time::Duration;

    fn running_timers() -> (SessionTimer, WarningTimer) {
        let mut session = SessionTimer::default();
        session.start(Duration::from_secs(30));
        let mut warning = WarningTimer::default();
        warning.start();
        (session, warning)
    }

    #[test]
    fn test_resets_both_timers() {
        let (mut session, mut warning) = running_timers();
        session.tick(Duration::from_secs(5));
        warning.tick(Duration::from_secs(80));
        assert!(warning.in_warning());

        let mut broadcaster = ResetBroadcaster::new();
        broadcaster.on_player_action(&mut session, &mut warning);

        assert_eq!(session.remaining(), Duration::from_secs(30));
        assert_eq!(warning.elapsed(), Duration::ZERO);
        assert!(!warning.in_warning());
        assert_eq!(broadcaster.resets(), 1);
    }

    #[test]
    fn test_safe_in_any_state() {
        let mut session = SessionTimer::default();
        let mut warning = WarningTimer::default();
        let mut broadcaster = ResetBroadcaster::new();
        broadcaster.on_player_action(&mut session, &mut warning);
        assert_eq!(session.state(), TimerState::Idle);
        assert_eq!(warning.state(), TimerState::Idle);
    }

    #[test]
    fn test_paused_session_still_resets_kick_timer() {
        let (mut session, mut warning) = running_timers();
        session.tick(Duration::from_secs(10));
        warning.tick(Duration::from_secs(10));
        session.pause();

        ResetBroadcaster::new().on_player_action(&mut session, &mut warning);

        assert_eq!(session.remaining(), Duration::from_secs(20));
        assert_eq!(warning.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_non_qualifying_input_ignored() {
        let (mut session, mut warning) = running_timers();
        session.tick(Duration::from_secs(10));
        let mut broadcaster = ResetBroadcaster::new();

        assert!(!broadcaster.on_input(&PlayerInput::Key(Key::Escape), &mut session, &mut warning));
        assert_eq!(session.remaining(), Duration::from_secs(20));
        assert_eq!(broadcaster.resets(), 0);

        assert!(broadcaster.on_input(&PlayerInput::Scroll(1.0), &mut session, &mut warning));
        assert_eq!(session.remaining(), Duration::from_secs(30));
    }
}
