//! Error types for selection

use thiserror::Error;

/// Result type for selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing left to pick; the hand is already resolved
    #[error("no live cards to select")]
    NoCandidates,

    /// Auto-selection already fired for this hand
    #[error("auto-select is disabled until the next deal")]
    Disabled,
}
