//! Core building blocks: RNG and configuration.
//!
//! Nothing in here knows the rules of Baccarat; the rule engine and the table
//! are configured and driven through these types.

pub mod rng;
pub mod config;

pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{Locale, TableConfig, DEFAULT_STORAGE_KEY};
