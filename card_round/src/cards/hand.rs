//! Five positional slots dealt per round.

use super::{
    entities::{Attribute, Card},
    errors::{CardError, CardResult},
};
use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 5;

/// Attributes accepted by each position, left to right.
pub const POSITION_ELIGIBILITY: [&[Attribute]; HAND_SIZE] = [
    &[Attribute::Fire],
    &[Attribute::Fire, Attribute::Water],
    &[Attribute::Water],
    &[Attribute::Water, Attribute::Grass],
    &[Attribute::Grass],
];

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SlotState {
    Live,
    Removed,
}

#[derive(Clone, Debug)]
struct Slot {
    card: Card,
    state: SlotState,
}

/// A dealt hand. Slots are only ever removed, never refilled or reordered.
#[derive(Clone, Debug)]
pub struct Hand {
    slots: [Slot; HAND_SIZE],
}

impl Hand {
    /// Assemble a hand, checking each card against its position.
    pub fn new(cards: [Card; HAND_SIZE]) -> CardResult<Self> {
        for (position, card) in cards.iter().enumerate() {
            if !POSITION_ELIGIBILITY[position].contains(&card.attribute()) {
                return Err(CardError::IneligibleCard {
                    position,
                    card: card.name().to_string(),
                });
            }
        }

        Ok(Self {
            slots: cards.map(|card| Slot {
                card,
                state: SlotState::Live,
            }),
        })
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        self.slots.get(position).map(|s| &s.card)
    }

    pub fn state(&self, position: usize) -> Option<SlotState> {
        self.slots.get(position).map(|s| s.state)
    }

    pub fn is_live(&self, position: usize) -> bool {
        self.state(position) == Some(SlotState::Live)
    }

    /// Positions that can still be selected, ascending.
    pub fn live_positions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.state == SlotState::Live)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.state == SlotState::Live)
            .count()
    }

    pub fn is_resolved(&self) -> bool {
        self.live_count() == 0
    }

    /// All cards in position order, regardless of state.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().map(|s| &s.card)
    }

    /// Mark a slot removed and hand back its card.
    ///
    /// # Errors
    ///
    /// * `CardError::SlotOutOfRange` - `position` is not in `0..HAND_SIZE`
    /// * `CardError::SlotAlreadyRemoved` - the slot was selected before
    pub fn remove(&mut self, position: usize) -> CardResult<Card> {
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(CardError::SlotOutOfRange(position))?;

        if slot.state == SlotState::Removed {
            return Err(CardError::SlotAlreadyRemoved(position));
        }

        slot.state = SlotState::Removed;
        Ok(slot.card.clone())
    }
}
