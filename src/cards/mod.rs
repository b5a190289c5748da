//! Card system: cards, ranks, suits and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Suit and rank, a plain `Copy` value
//! - `Rank`: Validated 1..=13 with Baccarat point value and display label
//! - `Deck`: Ordered stack built fresh every round, shuffled with Fisher-Yates

pub mod card;
pub mod deck;

pub use card::{Card, InvalidRank, Rank, Suit};
pub use deck::{shuffle, Deck, DeckError, DECK_SIZE};
