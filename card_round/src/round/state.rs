//! Round orchestration: one hand, two timers, one decision window.

use super::{
    config::RoundConfig,
    errors::{RoundError, RoundResult},
};
use crate::{
    cards::{Card, CardPool, HAND_SIZE, Hand, HandComposer},
    selection::{
        AutoSelector, GestureTracker, PlayerInput, ResetBroadcaster, SelectionError,
        SelectionEvent, SelectionReason,
    },
    timer::{SessionTimer, TimerState, WarningSignal, WarningTimer, ceil_secs},
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::time::Duration;

/// Things that happened during a [`Round::tick`]
#[derive(Debug, PartialEq, Eq)]
pub enum RoundEvent {
    /// A blocking overlay opened and froze the decision countdown
    Paused,
    /// The overlay closed and the countdown continues
    Resumed,
    /// The decision window ran out
    SessionExpired,
    /// A card left the hand
    Selected(SelectionEvent),
    /// The kick warning became visible
    KickWarning { remaining_secs: u64 },
    /// The player was removed for inactivity; the round is over
    Kicked,
}

/// Snapshot for the UI layer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundView {
    pub hand_number: u64,
    /// Cards by position; `None` once a slot has been sent
    pub cards: Vec<Option<Card>>,
    pub picks_remaining: usize,
    pub session_state: TimerState,
    pub countdown_secs: u64,
    pub decision_warning: bool,
    pub kick_state: TimerState,
    pub kick_remaining_secs: u64,
    pub kick_warning: bool,
    pub ended: bool,
}

/// Owns everything a single player's decision window needs. Components
/// are handed in at construction; nothing is looked up at runtime.
#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    pool: CardPool,
    composer: HandComposer,
    hand: Option<Hand>,
    session: SessionTimer,
    warning: WarningTimer,
    auto_selector: AutoSelector,
    broadcaster: ResetBroadcaster,
    gestures: GestureTracker,
    rng: StdRng,
    picks_remaining: usize,
    hand_number: u64,
    /// Set only when the overlay, not the caller, paused the countdown.
    overlay_paused: bool,
    ended: bool,
}

impl Round {
    pub fn new(config: RoundConfig, pool: CardPool) -> Self {
        Self::with_rng(config, pool, StdRng::from_os_rng())
    }

    /// Deterministic round for tests and replays.
    pub fn with_seed(config: RoundConfig, pool: CardPool, seed: u64) -> Self {
        Self::with_rng(config, pool, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: RoundConfig, pool: CardPool, rng: StdRng) -> Self {
        let session = SessionTimer::new(config.decision()).with_warning_at(config.decision_warning());
        let warning = WarningTimer::new(config.kick(), config.kick_warning());
        let gestures = GestureTracker::new(config.double_tap(), config.drag_select_height);
        Self::assemble(
            config,
            pool,
            session,
            warning,
            AutoSelector::new(),
            ResetBroadcaster::new(),
            gestures,
            rng,
        )
    }

    /// Wire a round from existing components.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        config: RoundConfig,
        pool: CardPool,
        session: SessionTimer,
        warning: WarningTimer,
        auto_selector: AutoSelector,
        broadcaster: ResetBroadcaster,
        gestures: GestureTracker,
        rng: StdRng,
    ) -> Self {
        Self {
            config,
            pool,
            composer: HandComposer::new(),
            hand: None,
            session,
            warning,
            auto_selector,
            broadcaster,
            gestures,
            rng,
            picks_remaining: 0,
            hand_number: 0,
            overlay_paused: false,
            ended: false,
        }
    }

    /// Deal a new hand and open a fresh decision window.
    ///
    /// The hand is fully composed before anything changes, so a failed deal
    /// leaves the round exactly as it was.
    ///
    /// # Errors
    ///
    /// * `RoundError::SessionEnded` - kicked or session over
    /// * `RoundError::Card` - the pool cannot fill every position
    pub fn deal(&mut self) -> RoundResult<&Hand> {
        if self.ended {
            return Err(RoundError::SessionEnded);
        }

        let hand = self.composer.compose_with(&self.pool, &mut self.rng)?;

        self.hand_number += 1;
        self.picks_remaining = self.config.picks_per_round.clamp(1, HAND_SIZE);
        self.overlay_paused = false;
        self.session.start(self.config.decision());
        if self.warning.state() == TimerState::Idle {
            self.warning.start();
        }
        self.auto_selector.rearm();
        self.gestures.clear();

        log::info!(
            "Hand {} dealt, {} pick(s) within {}s",
            self.hand_number,
            self.picks_remaining,
            self.config.decision_secs
        );

        let hand = self.hand.insert(hand);
        Ok(&*hand)
    }

    /// Remove a card from the hand. This is the one selection path for
    /// both manual and automatic picks; only non-automatic reasons count
    /// as player activity.
    ///
    /// # Errors
    ///
    /// * `RoundError::SessionEnded` - kicked or session over
    /// * `RoundError::NoHand` - nothing dealt
    /// * `RoundError::Selection(NoCandidates)` - all picks already made
    /// * `RoundError::Card` - slot out of range or already removed
    pub fn select(
        &mut self,
        position: usize,
        reason: SelectionReason,
    ) -> RoundResult<SelectionEvent> {
        if self.ended {
            return Err(RoundError::SessionEnded);
        }
        let hand = self.hand.as_mut().ok_or(RoundError::NoHand)?;
        if self.picks_remaining == 0 {
            return Err(SelectionError::NoCandidates.into());
        }

        let card = hand.remove(position)?;

        if reason.resets_timers() {
            self.broadcaster
                .on_player_action(&mut self.session, &mut self.warning);
        }

        self.picks_remaining -= 1;
        if self.picks_remaining == 0 || hand.is_resolved() {
            self.picks_remaining = 0;
            self.session.stop();
            self.auto_selector.disable();
            log::info!("Hand {} resolved", self.hand_number);
        }

        let event = SelectionEvent::new(card, position, reason);
        log::info!("Selected {}", event);
        Ok(event)
    }

    /// Pointer down on a card. A second tap inside the double-tap window
    /// selects it.
    pub fn tap(&mut self, position: usize, at: Duration) -> RoundResult<Option<SelectionEvent>> {
        if !self.accepts_gesture(position)? {
            return Ok(None);
        }
        match self.gestures.tap(position, at) {
            Some(reason) => self.select(position, reason).map(Some),
            None => Ok(None),
        }
    }

    /// A dragged card was let go at height `y`.
    pub fn drag_release(&mut self, position: usize, y: f32) -> RoundResult<Option<SelectionEvent>> {
        if !self.accepts_gesture(position)? {
            return Ok(None);
        }
        match self.gestures.drag_release(y) {
            Some(reason) => self.select(position, reason).map(Some),
            None => Ok(None),
        }
    }

    fn accepts_gesture(&self, position: usize) -> RoundResult<bool> {
        if self.ended {
            return Err(RoundError::SessionEnded);
        }
        let hand = self.hand.as_ref().ok_or(RoundError::NoHand)?;
        if position >= HAND_SIZE {
            return Err(crate::cards::CardError::SlotOutOfRange(position).into());
        }
        Ok(hand.is_live(position) && self.picks_remaining > 0)
    }

    /// Raw input from the UI. Returns whether it counted as activity.
    pub fn player_action(&mut self, input: &PlayerInput) -> bool {
        if self.ended {
            return false;
        }
        self.broadcaster
            .on_input(input, &mut self.session, &mut self.warning)
    }

    /// Advance both timers by `dt`.
    ///
    /// The overlay is checked first on every tick. It only ever pauses the
    /// decision countdown; the kick timer keeps running behind it.
    pub fn tick(&mut self, dt: Duration, overlay_open: bool) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        if self.ended {
            return events;
        }

        if overlay_open {
            if self.session.state() == TimerState::Running {
                self.session.pause();
                self.overlay_paused = true;
                log::debug!("Overlay opened, decision countdown paused");
                events.push(RoundEvent::Paused);
            }
        } else if self.overlay_paused {
            self.overlay_paused = false;
            if self.session.state() == TimerState::Paused {
                self.session.resume();
                log::debug!("Overlay closed, decision countdown resumed");
                events.push(RoundEvent::Resumed);
            }
        }

        if self.session.tick(dt) {
            events.push(RoundEvent::SessionExpired);
            if let Some(event) = self.auto_select() {
                events.push(RoundEvent::Selected(event));
            }
        }

        match self.warning.tick(dt) {
            Some(WarningSignal::WarningEntered { remaining }) => {
                events.push(RoundEvent::KickWarning {
                    remaining_secs: ceil_secs(remaining),
                });
            }
            Some(WarningSignal::Kick) => {
                self.finish();
                log::warn!("Player kicked for inactivity after hand {}", self.hand_number);
                events.push(RoundEvent::Kicked);
            }
            None => {}
        }

        events
    }

    fn auto_select(&mut self) -> Option<SelectionEvent> {
        let live = self
            .hand
            .as_ref()
            .map(Hand::live_positions)
            .unwrap_or_default();

        match self.auto_selector.pick(&live, &mut self.rng) {
            Ok(position) => match self.select(position, SelectionReason::AutoSelect) {
                Ok(event) => Some(event),
                Err(e) => {
                    log::warn!("Auto-select of slot {} failed: {}", position, e);
                    None
                }
            },
            Err(SelectionError::NoCandidates) => {
                log::debug!("Nothing left to auto-select");
                None
            }
            Err(SelectionError::Disabled) => {
                log::debug!("Auto-select already used for hand {}", self.hand_number);
                None
            }
        }
    }

    /// Explicitly freeze the decision countdown (not tied to an overlay).
    pub fn pause_session(&mut self) {
        self.session.pause();
    }

    pub fn resume_session(&mut self) {
        self.overlay_paused = false;
        self.session.resume();
    }

    /// Drop the current hand without ending the session.
    pub fn reset_round(&mut self) {
        self.hand = None;
        self.picks_remaining = 0;
        self.overlay_paused = false;
        self.session.stop();
        self.auto_selector.disable();
        self.gestures.clear();
        log::debug!("Round reset after hand {}", self.hand_number);
    }

    /// The network session is over. Stops both timers; no expiry or kick
    /// can fire afterwards.
    pub fn end_session(&mut self) {
        if self.ended {
            return;
        }
        self.warning.stop();
        self.finish();
        log::info!("Session ended after hand {}", self.hand_number);
    }

    fn finish(&mut self) {
        self.reset_round();
        self.ended = true;
    }

    pub fn view(&self) -> RoundView {
        let cards = match &self.hand {
            Some(hand) => (0..HAND_SIZE)
                .map(|p| hand.is_live(p).then(|| hand.card(p).cloned()).flatten())
                .collect(),
            None => Vec::new(),
        };

        RoundView {
            hand_number: self.hand_number,
            cards,
            picks_remaining: self.picks_remaining,
            session_state: self.session.state(),
            countdown_secs: self.session.display_seconds(),
            decision_warning: self.session.warning_active(),
            kick_state: self.warning.state(),
            kick_remaining_secs: self.warning.display_seconds(),
            kick_warning: self.warning.in_warning(),
            ended: self.ended,
        }
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn session(&self) -> &SessionTimer {
        &self.session
    }

    pub fn warning(&self) -> &WarningTimer {
        &self.warning
    }

    pub fn auto_selector(&self) -> &AutoSelector {
        &self.auto_selector
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    pub fn picks_remaining(&self) -> usize {
        self.picks_remaining
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cards::CardError, selection::Key};

    const SECOND: Duration = Duration::from_secs(1);

    fn pool() -> CardPool {
        CardPool::build(["Fire1", "Fire9", "Water3", "Water10", "Grass2", "Grass7"]).unwrap()
    }

    fn dealt(config: RoundConfig) -> Round {
        let mut round = Round::with_seed(config, pool(), 11);
        round.deal().unwrap();
        round
    }

    #[test]
    fn test_select_before_deal() {
        let mut round = Round::with_seed(RoundConfig::default(), pool(), 1);
        assert_eq!(
            round.select(0, SelectionReason::Manual).unwrap_err(),
            RoundError::NoHand
        );
    }

    #[test]
    fn test_failed_deal_changes_nothing() {
        let pool = CardPool::build(["Fire1", "Water2"]).unwrap();
        let mut round = Round::with_seed(RoundConfig::default(), pool, 1);
        let err = round.deal().unwrap_err();
        assert_eq!(err, RoundError::Card(CardError::NoEligibleCard { position: 4 }));
        assert!(round.hand().is_none());
        assert_eq!(round.hand_number(), 0);
        assert_eq!(round.session().state(), TimerState::Idle);
        assert_eq!(round.warning().state(), TimerState::Idle);
    }

    #[test]
    fn test_deal_starts_both_timers() {
        let round = dealt(RoundConfig::default());
        assert_eq!(round.session().state(), TimerState::Running);
        assert_eq!(round.session().remaining(), Duration::from_secs(30));
        assert_eq!(round.warning().state(), TimerState::Running);
        assert_eq!(round.picks_remaining(), 1);
    }

    #[test]
    fn test_manual_pick_stops_session() {
        let mut round = dealt(RoundConfig::default());
        let event = round.select(2, SelectionReason::Manual).unwrap();
        assert_eq!(event.position, 2);
        assert_eq!(event.reason, SelectionReason::Manual);
        assert_eq!(round.session().state(), TimerState::Idle);
        assert_eq!(round.picks_remaining(), 0);
        assert_eq!(
            round.select(3, SelectionReason::Manual).unwrap_err(),
            RoundError::Selection(SelectionError::NoCandidates)
        );
    }

    #[test]
    fn test_manual_pick_resets_kick_timer() {
        let config = RoundConfig {
            picks_per_round: 2,
            ..RoundConfig::default()
        };
        let mut round = dealt(config);
        round.tick(Duration::from_secs(20), false);
        round.select(0, SelectionReason::DragDrop).unwrap();
        assert_eq!(round.session().remaining(), Duration::from_secs(30));
        assert_eq!(round.warning().elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_same_slot_cannot_be_sent_twice() {
        let config = RoundConfig {
            picks_per_round: 5,
            ..RoundConfig::default()
        };
        let mut round = dealt(config);
        round.select(1, SelectionReason::Manual).unwrap();
        assert_eq!(
            round.select(1, SelectionReason::Manual).unwrap_err(),
            RoundError::Card(CardError::SlotAlreadyRemoved(1))
        );
    }

    #[test]
    fn test_overlay_pauses_only_session() {
        let mut round = dealt(RoundConfig::default());
        let events = round.tick(Duration::from_secs(5), true);
        assert_eq!(events, vec![RoundEvent::Paused]);
        assert_eq!(round.session().remaining(), Duration::from_secs(30));
        assert_eq!(round.warning().elapsed(), Duration::from_secs(5));

        // Acting behind the overlay cannot bank decision time.
        round.tick(Duration::from_secs(5), true);
        assert!(round.player_action(&PlayerInput::UiButton("help".to_string())));
        assert_eq!(round.session().remaining(), Duration::from_secs(30));
        assert_eq!(round.warning().elapsed(), Duration::ZERO);

        let events = round.tick(SECOND, false);
        assert_eq!(events, vec![RoundEvent::Resumed]);
        assert_eq!(round.session().remaining(), Duration::from_secs(29));
    }

    #[test]
    fn test_overlay_close_keeps_explicit_pause() {
        let mut round = dealt(RoundConfig::default());
        round.pause_session();
        round.tick(SECOND, true);
        round.tick(SECOND, false);
        assert_eq!(round.session().state(), TimerState::Paused);
        round.resume_session();
        assert_eq!(round.session().state(), TimerState::Running);
    }

    #[test]
    fn test_double_tap_selects() {
        let mut round = dealt(RoundConfig::default());
        assert_eq!(round.tap(4, Duration::from_millis(100)).unwrap(), None);
        let event = round.tap(4, Duration::from_millis(300)).unwrap().unwrap();
        assert_eq!(event.reason, SelectionReason::DoubleTap);
        assert_eq!(event.position, 4);
    }

    #[test]
    fn test_drag_below_threshold_returns_card() {
        let mut round = dealt(RoundConfig::default());
        assert_eq!(round.drag_release(0, 20.0).unwrap(), None);
        assert!(round.hand().unwrap().is_live(0));
        let event = round.drag_release(0, 300.0).unwrap().unwrap();
        assert_eq!(event.reason, SelectionReason::DragDrop);
    }

    #[test]
    fn test_gesture_out_of_range() {
        let mut round = dealt(RoundConfig::default());
        assert_eq!(
            round.tap(9, Duration::ZERO).unwrap_err(),
            RoundError::Card(CardError::SlotOutOfRange(9))
        );
    }

    #[test]
    fn test_system_key_does_not_reset() {
        let mut round = dealt(RoundConfig::default());
        round.tick(Duration::from_secs(8), false);
        assert!(!round.player_action(&PlayerInput::Key(Key::Function(5))));
        assert_eq!(round.session().remaining(), Duration::from_secs(22));
    }

    #[test]
    fn test_end_session_discards_pending_expiry() {
        let mut round = dealt(RoundConfig::default());
        round.tick(Duration::from_secs(29), false);
        round.end_session();
        assert!(round.tick(Duration::from_secs(120), false).is_empty());
        assert!(round.hand().is_none());
        assert_eq!(round.deal().unwrap_err(), RoundError::SessionEnded);
        assert!(!round.warning().has_kicked());
    }

    #[test]
    fn test_kick_ends_round() {
        let config = RoundConfig {
            decision_secs: 1_000,
            ..RoundConfig::default()
        };
        let mut round = dealt(config);
        let mut kicked = 0;
        for _ in 0..120 {
            kicked += round
                .tick(SECOND, false)
                .iter()
                .filter(|e| **e == RoundEvent::Kicked)
                .count();
        }
        assert_eq!(kicked, 1);
        assert!(round.is_ended());
        assert_eq!(round.session().state(), TimerState::Idle);
        assert!(round.hand().is_none());
    }

    #[test]
    fn test_view_hides_sent_cards() {
        let config = RoundConfig {
            picks_per_round: 2,
            ..RoundConfig::default()
        };
        let mut round = dealt(config);
        round.select(3, SelectionReason::Manual).unwrap();
        let view = round.view();
        assert_eq!(view.cards.len(), HAND_SIZE);
        assert!(view.cards[3].is_none());
        assert_eq!(view.cards.iter().filter(|c| c.is_some()).count(), 4);
        assert_eq!(view.picks_remaining, 1);
        assert_eq!(view.countdown_secs, 30);
        assert!(!view.decision_warning);
    }
}
