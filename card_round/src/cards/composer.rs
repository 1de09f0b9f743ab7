//! Rank-weighted hand composition.

use super::{
    entities::{Card, Rank},
    errors::{CardError, CardResult},
    hand::{HAND_SIZE, Hand, POSITION_ELIGIBILITY},
    pool::CardPool,
};
use rand::{Rng, seq::IndexedRandom};

/// Relative draw weight for a rank. Low ranks are common, high ranks rare:
///
/// | rank  | weight |
/// |-------|--------|
/// | 1..=6 | 50     |
/// | 7, 8  | 30     |
/// | 9     | 15     |
/// | 10    | 5      |
/// | other | 1      |
pub const fn rank_weight(rank: Rank) -> u32 {
    match rank {
        1..=6 => 50,
        7 | 8 => 30,
        9 => 15,
        10 => 5,
        _ => 1,
    }
}

/// Pick one candidate with probability proportional to its rank weight.
///
/// Same distribution as repeating every candidate `rank_weight` times and
/// sampling that multiset uniformly, without building the multiset.
pub fn weighted_pick<'a, R>(candidates: &[&'a Card], rng: &mut R) -> Option<&'a Card>
where
    R: Rng + ?Sized,
{
    candidates
        .choose_weighted(rng, |card| rank_weight(card.rank()))
        .ok()
        .copied()
}

/// Deals hands from a [`CardPool`]. Stateless; the pool is never mutated.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandComposer;

impl HandComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose a hand using the thread-local RNG.
    pub fn compose(&self, pool: &CardPool) -> CardResult<Hand> {
        self.compose_with(pool, &mut rand::rng())
    }

    /// Compose a hand, one weighted pick per position.
    ///
    /// The whole hand is built before it is returned, so a failure at any
    /// position leaves nothing behind.
    ///
    /// # Errors
    ///
    /// * `CardError::NoCardsAvailable` - the pool is empty
    /// * `CardError::NoEligibleCard` - a position has no candidate
    pub fn compose_with<R>(&self, pool: &CardPool, rng: &mut R) -> CardResult<Hand>
    where
        R: Rng + ?Sized,
    {
        if pool.is_empty() {
            return Err(CardError::NoCardsAvailable);
        }

        let mut picked: Vec<Card> = Vec::with_capacity(HAND_SIZE);
        for (position, attributes) in POSITION_ELIGIBILITY.iter().enumerate() {
            let candidates = pool.eligible(attributes);
            let card = weighted_pick(&candidates, rng)
                .ok_or(CardError::NoEligibleCard { position })?;
            picked.push(card.clone());
        }

        let cards: [Card; HAND_SIZE] = picked
            .try_into()
            .map_err(|_| CardError::NoCardsAvailable)?;
        let hand = Hand::new(cards)?;

        log::debug!(
            "Composed hand: {}",
            hand.cards()
                .map(Card::name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(hand)
    }
}
