//! Error types for the cards module

use thiserror::Error;

/// Result type for card operations
pub type CardResult<T> = Result<T, CardError>;

/// Errors raised while building pools, composing hands or removing slots
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    /// The catalogue was empty, so no hand can ever be dealt
    #[error("no cards available")]
    NoCardsAvailable,

    /// A constrained position has no candidate in the pool
    #[error("no eligible card for position {position}")]
    NoEligibleCard { position: usize },

    /// A card was placed in a position that does not accept its attribute
    #[error("card {card} is not eligible for position {position}")]
    IneligibleCard { position: usize, card: String },

    /// Slot index outside the hand
    #[error("slot {0} is out of range")]
    SlotOutOfRange(usize),

    /// Slot was already selected
    #[error("slot {0} was already removed")]
    SlotAlreadyRemoved(usize),
}
