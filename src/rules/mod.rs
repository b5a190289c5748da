//! Baccarat rules: hands, scoring and the coup state machine.
//!
//! The engine never renders or persists anything. It reports hand changes
//! through `HandObserver` and leaves the rest to the table.

pub mod engine;
pub mod hand;

pub use engine::{
    banker_draws, is_natural, player_draws, Coup, HandObserver, Outcome, RulesError, Stage,
    ROUND_CARD_LIMIT,
};
pub use hand::{Hand, HandError, Side, MAX_HAND_SIZE};
