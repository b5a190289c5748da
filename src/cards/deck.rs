//! Deck construction, shuffling and drawing.
//!
//! A `Deck` is an ordered stack; the top of the deck is the end of the
//! backing `Vec`, so drawing is a `pop`.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::card::{Card, Rank, Suit};
use crate::core::RandomSource;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Why a prepared deck was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("card {0} appears more than once")]
    Duplicate(Card),

    #[error("a deck holds at most {DECK_SIZE} cards, got {0}")]
    TooMany(usize),
}

/// Shuffle a slice in place with Fisher-Yates.
///
/// Walks `i` from the last index down to 1, picks `j` uniformly in `[0, i]`
/// and swaps. Every permutation is equally likely given a uniform source.
pub fn shuffle<T, R: RandomSource + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64) as usize).min(i);
        slice.swap(i, j);
    }
}

/// An ordered stack of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh 52-card deck: suits in `Suit::ALL` order, ranks Ace to King
    /// within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A prepared deck whose first card is drawn first.
    ///
    /// Fails on a repeated card or more than `DECK_SIZE` cards.
    ///
    /// ```
    /// use baccarat_sim::cards::{Card, Deck, Rank, Suit};
    ///
    /// let first = Card::new(Suit::Spade, Rank::ACE);
    /// let second = Card::new(Suit::Heart, Rank::KING);
    /// let mut deck = Deck::from_draw_order([first, second])?;
    /// assert_eq!(deck.draw(), Some(first));
    /// assert_eq!(deck.draw(), Some(second));
    /// assert_eq!(deck.draw(), None);
    /// # Ok::<(), baccarat_sim::cards::DeckError>(())
    /// ```
    pub fn from_draw_order(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        if cards.len() > DECK_SIZE {
            return Err(DeckError::TooMany(cards.len()));
        }

        let mut seen = FxHashSet::default();
        if let Some(&dup) = cards.iter().find(|&&card| !seen.insert(card)) {
            return Err(DeckError::Duplicate(dup));
        }

        cards.reverse();
        Ok(Self { cards })
    }

    /// Shuffle the deck in place.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
