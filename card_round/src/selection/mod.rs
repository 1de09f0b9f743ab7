//! Card selection: who picked which slot, and what a pick does to the timers.
//!
//! Manual picks (double tap, drag and drop, explicit pick) and automatic
//! picks on decision expiry all go through the same entrypoint on the round.
//! The only difference is [`SelectionReason::resets_timers`]: an automatic
//! pick never refills the timers that caused it.

pub mod auto_select;
pub mod broadcaster;
pub mod errors;
pub mod events;
pub mod gesture;
pub mod input;

pub use auto_select::AutoSelector;
pub use broadcaster::ResetBroadcaster;
pub use errors::{SelectionError, SelectionResult};
pub use events::{SelectionEvent, SelectionReason};
pub use gesture::GestureTracker;
pub use input::{Key, PlayerInput};
