//! Static card catalogue.

use super::{
    entities::{Attribute, Card},
    errors::{CardError, CardResult},
};
use std::collections::HashSet;

/// Every card a hand may be drawn from. Built once per game session and
/// never depleted by dealing.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// Build the pool from asset names
    ///
    /// # Arguments
    ///
    /// * `names` - Asset names; duplicates collapse to one card
    ///
    /// # Errors
    ///
    /// * `CardError::NoCardsAvailable` - `names` was empty
    pub fn build<I, S>(names: I) -> CardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut cards = Vec::new();
        for name in names {
            let name: &str = name.as_ref();
            if seen.insert(name.to_string()) {
                cards.push(Card::from_name(name));
            }
        }

        if cards.is_empty() {
            return Err(CardError::NoCardsAvailable);
        }

        log::debug!(
            "Card pool built: {} cards ({} fire, {} water, {} grass)",
            cards.len(),
            cards.iter().filter(|c| c.attribute() == Attribute::Fire).count(),
            cards.iter().filter(|c| c.attribute() == Attribute::Water).count(),
            cards.iter().filter(|c| c.attribute() == Attribute::Grass).count(),
        );

        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.name() == name)
    }

    /// Number of cards with the given attribute
    pub fn count(&self, attribute: Attribute) -> usize {
        self.cards
            .iter()
            .filter(|c| c.attribute() == attribute)
            .count()
    }

    /// Cards whose attribute is in `attributes`
    pub fn eligible(&self, attributes: &[Attribute]) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| attributes.contains(&c.attribute()))
            .collect()
    }
}
