//! Error types for round orchestration

use crate::{cards::CardError, selection::SelectionError};
use thiserror::Error;

/// Result type for round operations
pub type RoundResult<T> = Result<T, RoundError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoundError {
    /// Composition or slot error
    #[error(transparent)]
    Card(#[from] CardError),

    /// Selection error
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// No hand has been dealt, or it was discarded
    #[error("no hand in play")]
    NoHand,

    /// The player was kicked or the network session ended
    #[error("session has ended")]
    SessionEnded,
}
