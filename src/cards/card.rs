//! Playing cards: suits, ranks and Baccarat point values.
//!
//! A `Card` is a plain `Copy` value. Its `Rank` carries both the display
//! label (`A`, `2`..`10`, `J`, `Q`, `K`) and the Baccarat point value, which
//! is distinct from the face: tens and court cards count zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rank outside `1..=13`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid rank {0}: expected 1..=13")]
pub struct InvalidRank(pub u8);

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, 1 (Ace) through 13 (King).
///
/// ```
/// use baccarat_sim::cards::Rank;
///
/// assert_eq!(Rank::ACE.point_value(), 1);
/// assert_eq!(Rank::new(7).unwrap().point_value(), 7);
/// assert_eq!(Rank::QUEEN.point_value(), 0);
/// assert_eq!(Rank::QUEEN.label(), "Q");
/// assert!(Rank::new(14).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);
    pub const FOUR: Rank = Rank(4);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw rank value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ranks in deck-building order.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13u8).map(Rank)
    }

    /// Baccarat point value: Ace 1, two through nine at face, ten and court cards 0.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self.0 {
            1 => 1,
            2..=9 => self.0,
            _ => 0,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or(InvalidRank(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Baccarat point value of this card.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        self.rank.point_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
