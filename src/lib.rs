//! # baccarat-sim
//!
//! A Baccarat round simulator: deck building, Fisher-Yates shuffling,
//! Baccarat scoring, the fixed third-card rules, and win/tie tallies that
//! survive between sessions.
//!
//! ## Design Principles
//!
//! 1. **Headless Core**: The rule engine never renders or persists. Hand
//!    changes go out through `HandObserver`; the table speaks to a `View`
//!    and a `KeyValueStore`.
//!
//! 2. **Injected Randomness**: Shuffling takes any `RandomSource`. A seeded
//!    `GameRng` makes every round reproducible.
//!
//! 3. **Best-Effort Storage**: Counters load and save through the store, but
//!    a failing store never interrupts play.
//!
//! ## Example
//!
//! ```
//! use baccarat_sim::{MemoryStore, RecordingView, Table, TableConfig};
//!
//! let mut table = Table::open(
//!     TableConfig::default().with_seed(42),
//!     MemoryStore::new(),
//!     RecordingView::new(),
//! );
//!
//! let report = table.play_round();
//! assert_eq!(report.counters.total(), 1);
//!
//! table.reset_game();
//! assert!(table.counters().is_zero());
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: Cards, ranks, suits, the deck and the shuffler
//! - `rules`: Hands, scoring and the coup state machine
//! - `table`: Round controller, counters and views
//! - `storage`: Key-value stores for the counters

pub mod core;
pub mod cards;
pub mod rules;
pub mod table;
pub mod storage;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Locale, RandomSource, TableConfig};

pub use crate::cards::{Card, Deck, DeckError, Rank, Suit};

pub use crate::rules::{
    banker_draws, player_draws, Coup, Hand, HandObserver, Outcome, RulesError, Side, Stage,
};

pub use crate::table::{
    Counters, NullView, RecordingView, RenderEvent, RoundReport, Table, TextView, View,
};

pub use crate::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
