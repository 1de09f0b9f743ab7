use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Attribute {
    Fire,
    Water,
    Grass,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Self::Fire, Self::Water, Self::Grass];

    /// Keyword searched for in asset names.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Grass => "Grass",
        }
    }

    /// Classify an asset name by substring. Water is checked before Grass,
    /// and anything without a keyword falls back to Fire.
    pub fn classify(name: &str) -> Self {
        if name.contains(Self::Water.keyword()) {
            Self::Water
        } else if name.contains(Self::Grass.keyword()) {
            Self::Grass
        } else {
            Self::Fire
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Card strength read from the asset name. The weighted table covers 1..=10;
/// anything else is an off-table rank.
pub type Rank = u32;

/// Rank used when an asset name carries no trailing number.
pub const FALLBACK_RANK: Rank = 1;

/// Extract the run of trailing ASCII digits, e.g. `"Water_07"` -> 7.
pub fn parse_rank(name: &str) -> Rank {
    let digits = name
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return FALLBACK_RANK;
    }
    // Overflowing suffixes land outside the weighted table.
    name[name.len() - digits..].parse().unwrap_or(0)
}

/// A card is identified by its asset name. Attribute and rank are derived
/// from that name once, when the pool is built.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card {
    name: String,
    attribute: Attribute,
    rank: Rank,
}

impl Card {
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute: Attribute::classify(name),
            rank: parse_rank(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
