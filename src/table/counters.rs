//! Cumulative win and tie tallies.

use serde::{Deserialize, Serialize};

use crate::rules::Outcome;

/// Running totals across rounds.
///
/// Serialized as `{"player":n,"banker":n,"ties":n}`; all three fields are
/// required when reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counters {
    pub player: u64,
    pub banker: u64,
    pub ties: u64,
}

impl Counters {
    /// Count one resolved round. Exactly one field moves, and it sticks at
    /// `u64::MAX` rather than wrapping.
    pub fn record(&mut self, outcome: Outcome) {
        let field = match outcome {
            Outcome::PlayerWin => &mut self.player,
            Outcome::BankerWin => &mut self.banker,
            Outcome::Tie => &mut self.ties,
        };
        *field = field.saturating_add(1);
    }

    /// Tally for one outcome.
    #[must_use]
    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::PlayerWin => self.player,
            Outcome::BankerWin => self.banker,
            Outcome::Tie => self.ties,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Rounds played, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.player.saturating_add(self.banker).saturating_add(self.ties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_moves_one_field() {
        let mut counters = Counters::default();
        counters.record(Outcome::BankerWin);
        counters.record(Outcome::BankerWin);
        counters.record(Outcome::Tie);

        assert_eq!(counters, Counters { player: 0, banker: 2, ties: 1 });
        assert_eq!(counters.get(Outcome::BankerWin), 2);
        assert_eq!(counters.total(), 3);
    }

    #[test]
    fn test_record_saturates() {
        let mut counters = Counters { player: u64::MAX, banker: u64::MAX - 1, ties: 0 };
        counters.record(Outcome::PlayerWin);
        counters.record(Outcome::BankerWin);
        assert_eq!(counters.player, u64::MAX);
        assert_eq!(counters.banker, u64::MAX);
        assert_eq!(counters.total(), u64::MAX);
    }

    #[test]
    fn test_reset() {
        let mut counters = Counters { player: 4, banker: 1, ties: 9 };
        assert!(!counters.is_zero());
        counters.reset();
        assert!(counters.is_zero());
    }
}
