//! # Card Round
//!
//! A timed, single-pick card round: deal a constrained five-card hand, give
//! the player a bounded window to send one card, and pick for them if they
//! run out of time.
//!
//! ## Architecture
//!
//! Three pieces of state interact on every tick:
//!
//! - **Hand**: five slots, each restricted to one or two attributes
//! - **Session timer**: the decision countdown; on expiry a random live
//!   card is selected automatically
//! - **Warning timer**: the inactivity countdown; on expiry the player is
//!   kicked from the session
//!
//! Qualifying player input resets both timers through a single broadcaster.
//! Automatic picks do not.
//!
//! ## Core Modules
//!
//! - [`cards`]: card catalogue, hand composition, slots
//! - [`timer`]: decision and inactivity timers
//! - [`selection`]: selection events, auto-select, input filtering, gestures
//! - [`round`]: orchestration and the async round actor
//!
//! ## Example
//!
//! ```
//! use card_round::{CardPool, Round, RoundConfig, SelectionReason};
//! use std::time::Duration;
//!
//! let pool = CardPool::build(["Fire1", "Fire7", "Water2", "Water9", "Grass3", "Grass10"]).unwrap();
//! let mut round = Round::with_seed(RoundConfig::default(), pool, 42);
//!
//! round.deal().unwrap();
//! let event = round.select(2, SelectionReason::Manual).unwrap();
//! assert_eq!(event.position, 2);
//! assert!(round.tick(Duration::from_secs(1), false).is_empty());
//! ```

/// Card catalogue, hand composition, and slots.
pub mod cards;
pub use cards::{Attribute, Card, CardError, CardPool, HAND_SIZE, Hand, HandComposer};

/// Decision and inactivity timers.
pub mod timer;
pub use timer::{SessionTimer, TimerState, WarningSignal, WarningTimer};

/// Selection events and the components that produce them.
pub mod selection;
pub use selection::{
    AutoSelector, PlayerInput, ResetBroadcaster, SelectionError, SelectionEvent,
    SelectionReason,
};

/// Round orchestration and the async actor.
pub mod round;
pub use round::{
    Round, RoundActor, RoundConfig, RoundError, RoundEvent, RoundHandle, RoundNotification,
    RoundResponse, RoundView,
};
