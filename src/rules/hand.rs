//! Hands and sides.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::Card;

/// Most cards a Baccarat hand can hold.
pub const MAX_HAND_SIZE: usize = 3;

/// The two sides of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Banker,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Banker => f.write_str("Banker"),
        }
    }
}

/// A card list too long to be a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a hand holds at most {MAX_HAND_SIZE} cards, got {0}")]
pub struct HandError(pub usize);

/// The cards held by one side.
///
/// The score is never stored; `score()` recomputes it from the cards.
///
/// ```
/// use baccarat_sim::cards::{Card, Rank, Suit};
/// use baccarat_sim::rules::Hand;
///
/// let hand = Hand::from_cards([
///     Card::new(Suit::Spade, Rank::SEVEN),
///     Card::new(Suit::Heart, Rank::SIX),
/// ]);
/// assert_eq!(hand.score(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: SmallVec<[Card; MAX_HAND_SIZE]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from up to three cards.
    ///
    /// # Panics
    /// If more than `MAX_HAND_SIZE` cards are given.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.push(card);
        }
        hand
    }

    /// Append a card.
    ///
    /// # Panics
    /// If the hand already holds `MAX_HAND_SIZE` cards.
    pub fn push(&mut self, card: Card) {
        assert!(self.cards.len() < MAX_HAND_SIZE, "A hand holds at most 3 cards");
        self.cards.push(card);
    }

    /// Baccarat score: sum of point values mod 10.
    #[must_use]
    pub fn score(&self) -> u8 {
        let total: u32 = self.cards.iter().map(|c| u32::from(c.point_value())).sum();
        (total % 10) as u8
    }

    /// True for a two-card 8 or 9.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() >= 8
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The third card, if one was drawn.
    #[must_use]
    pub fn third(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.len() > MAX_HAND_SIZE {
            return Err(HandError(cards.len()));
        }
        Ok(Self { cards: cards.into_iter().collect() })
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.into_vec()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
