use crate::cards::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    Manual,
    DoubleTap,
    DragDrop,
    AutoSelect,
}

impl SelectionReason {
    /// Every pick except an automatic one counts as player activity.
    pub const fn resets_timers(self) -> bool {
        !matches!(self, Self::AutoSelect)
    }
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Manual => "manual",
            Self::DoubleTap => "double tap",
            Self::DragDrop => "drag and drop",
            Self::AutoSelect => "auto select",
        };
        write!(f, "{repr}")
    }
}

/// One card leaving the hand.
///
/// Not `Clone`. Each event is produced once per removal and moved into the
/// network outbox.
#[derive(Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub card: Card,
    pub position: usize,
    pub reason: SelectionReason,
}

impl SelectionEvent {
    pub fn new(card: Card, position: usize, reason: SelectionReason) -> Self {
        Self {
            card,
            position,
            reason,
        }
    }

    /// JSON line handed to the network layer.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from slot {} ({})", self.card, self.position, self.reason)
    }
}
