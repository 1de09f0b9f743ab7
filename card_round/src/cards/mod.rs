//! Card catalogue and hand dealing.
//!
//! This module provides:
//! - [`entities`]: attributes, ranks and cards derived from asset names
//! - [`pool`]: the static catalogue every hand is drawn from
//! - [`hand`]: the five positional slots a player decides over
//! - [`composer`]: rank-weighted, attribute-constrained hand composition
//!
//! ## Positions
//!
//! | position | eligible attributes |
//! |----------|---------------------|
//! | 0        | Fire                |
//! | 1        | Fire, Water         |
//! | 2        | Water               |
//! | 3        | Water, Grass        |
//! | 4        | Grass               |

pub mod composer;
pub mod entities;
pub mod errors;
pub mod hand;
pub mod pool;

pub use composer::{HandComposer, rank_weight};
pub use entities::{Attribute, Card, Rank};
pub use errors::{CardError, CardResult};
pub use hand::{HAND_SIZE, Hand, POSITION_ELIGIBILITY, SlotState};
pub use pool::CardPool;
