//! Round module: one player's decision window, with an async actor wrapper.
//!
//! This module implements:
//! - Round: deals hands, routes selections, advances both timers
//! - RoundActor: tokio task owning a Round, driven by an interval
//! - Message-based communication with tokio channels
//! - Environment-driven configuration
//!
//! ## Architecture
//!
//! The actor measures elapsed time between interval ticks and feeds it to
//! [`Round::tick`]. Everything that touches the timers runs on that one task,
//! so a player action and an expiry can never interleave. Selected cards
//! leave through an mpsc outbox; notifications fan out to subscribers.
//!
//! ## Example
//!
//! ```ignore
//! use card_round::cards::CardPool;
//! use card_round::round::{Round, RoundActor, RoundConfig};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = CardPool::build(["Fire1", "Water2", "Grass3"]).unwrap();
//!     let round = Round::new(RoundConfig::from_env(), pool);
//!     let (outbox, mut selections) = mpsc::channel(16);
//!
//!     let (actor, handle) = RoundActor::new(round, outbox);
//!     tokio::spawn(actor.run());
//!
//!     handle.deal().await.unwrap();
//!     while let Some(event) = selections.recv().await {
//!         println!("{}", event);
//!     }
//! }
//! ```

pub mod actor;
pub mod config;
pub mod errors;
pub mod messages;
pub mod state;

pub use actor::{RoundActor, RoundHandle};
pub use config::{ConfigError, RoundConfig};
pub use errors::{RoundError, RoundResult};
pub use messages::{RoundMessage, RoundNotification, RoundResponse};
pub use state::{Round, RoundEvent, RoundView};
