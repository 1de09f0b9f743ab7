//! Round actor message types.

use super::{errors::RoundError, state::RoundView};
use crate::{
    cards::Card,
    selection::{PlayerInput, SelectionEvent, SelectionReason},
};
use tokio::sync::{mpsc, oneshot};

/// Messages that can be sent to a RoundActor
#[derive(Debug)]
pub enum RoundMessage {
    /// Deal a fresh hand and open the decision window
    Deal {
        response: oneshot::Sender<RoundResponse>,
    },

    /// Explicit pick of a slot (button, keyboard)
    Select {
        position: usize,
        response: oneshot::Sender<RoundResponse>,
    },

    /// Pointer down on a card; timestamped by the actor's clock
    Tap {
        position: usize,
        response: oneshot::Sender<RoundResponse>,
    },

    /// Dragged card released at height `y`
    DragRelease {
        position: usize,
        y: f32,
        response: oneshot::Sender<RoundResponse>,
    },

    /// Raw UI input; responds with whether it counted as activity
    Input {
        input: PlayerInput,
        response: oneshot::Sender<bool>,
    },

    /// Blocking overlay opened or closed
    SetOverlay { open: bool },

    /// Get a snapshot of the round
    GetView {
        response: oneshot::Sender<RoundView>,
    },

    /// Drop the current hand, keep the session
    ResetRound {
        response: oneshot::Sender<RoundResponse>,
    },

    /// Network session is over
    EndSession {
        response: oneshot::Sender<RoundResponse>,
    },

    /// Stop the actor
    Close {
        response: oneshot::Sender<RoundResponse>,
    },

    /// Subscribe to round notifications
    Subscribe {
        subscriber_id: u64,
        sender: mpsc::Sender<RoundNotification>,
    },

    /// Unsubscribe from round notifications
    Unsubscribe { subscriber_id: u64 },
}

impl RoundMessage {
    /// Whether handling this message touches the hand or the timers.
    /// Timers are brought up to date before any such message is applied.
    pub fn changes_state(&self) -> bool {
        matches!(
            self,
            Self::Deal { .. }
                | Self::Select { .. }
                | Self::Tap { .. }
                | Self::DragRelease { .. }
                | Self::Input { .. }
                | Self::SetOverlay { .. }
                | Self::ResetRound { .. }
                | Self::EndSession { .. }
        )
    }
}

/// Response from round operations
#[derive(Debug, Clone, PartialEq)]
pub enum RoundResponse {
    /// Operation succeeded
    Success,

    /// A hand was dealt
    Dealt { hand_number: u64, cards: Vec<Card> },

    /// A card left the hand
    Selected {
        card: Card,
        position: usize,
        reason: SelectionReason,
    },

    /// Gesture registered but did not complete a selection
    Ignored,

    /// Operation failed
    Rejected(RoundError),
}

impl From<&SelectionEvent> for RoundResponse {
    fn from(event: &SelectionEvent) -> Self {
        Self::Selected {
            card: event.card.clone(),
            position: event.position,
            reason: event.reason,
        }
    }
}

/// Notification broadcast to subscribers (UI layers, spectators)
#[derive(Debug, Clone, PartialEq)]
pub enum RoundNotification {
    Dealt { hand_number: u64 },
    Selected {
        card: Card,
        position: usize,
        reason: SelectionReason,
    },
    SessionExpired,
    Paused,
    Resumed,
    KickWarning { remaining_secs: u64 },
    Kicked,
    SessionEnded,
}

impl From<&SelectionEvent> for RoundNotification {
    fn from(event: &SelectionEvent) -> Self {
        Self::Selected {
            card: event.card.clone(),
            position: event.position,
            reason: event.reason,
        }
    }
}
