//! The table: runs rounds and keeps the tallies.

use serde::{Deserialize, Serialize};

use super::counters::Counters;
use super::view::View;
use crate::cards::Deck;
use crate::core::{GameRng, GameRngState, TableConfig};
use crate::rules::{Coup, Hand, Outcome, RulesError};
use crate::storage::{self, KeyValueStore};

/// Summary of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub player: Hand,
    pub banker: Hand,
    pub player_score: u8,
    pub banker_score: u8,
    /// Either side was dealt 8 or 9.
    pub natural: bool,
    pub outcome: Outcome,
    /// Tallies after this round was counted.
    pub counters: Counters,
}

/// A Baccarat table bound to a store and a view.
///
/// The table owns the counters. They are loaded once in `open`, written back
/// after every change, and storage failures never interrupt play.
pub struct Table<S, V> {
    config: TableConfig,
    rng: GameRng,
    counters: Counters,
    store: S,
    view: V,
}

impl<S: KeyValueStore, V: View> Table<S, V> {
    /// Open a table, loading counters from `store`.
    ///
    /// Missing, unreadable or malformed counters start from zero. Counters
    /// already above zero are shown straight away.
    pub fn open(config: TableConfig, store: S, mut view: V) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let counters = match storage::read_counters(&store, &config.storage_key) {
            Ok(Some(counters)) => counters,
            Ok(None) => Counters::default(),
            Err(e) => {
                log::warn!("loading counters failed, starting from zero: {}", e);
                Counters::default()
            }
        };

        if !counters.is_zero() {
            view.render_counters(&counters);
        }

        log::info!("table open (seed {}, {} rounds on record)", rng.seed(), counters.total());

        Self {
            config,
            rng,
            counters,
            store,
            view,
        }
    }

    /// Deal and resolve a round from a freshly shuffled deck.
    pub fn play_round(&mut self) -> RoundReport {
        let coup = Coup::shuffled(&mut self.rng, &mut self.view);
        self.finish(coup)
    }

    /// Deal and resolve a round from a prepared deck.
    ///
    /// The deck is used as given, without shuffling.
    pub fn play_round_with(&mut self, deck: Deck) -> Result<RoundReport, RulesError> {
        let coup = Coup::deal(deck, &mut self.view)?;
        Ok(self.finish(coup))
    }

    fn finish(&mut self, mut coup: Coup) -> RoundReport {
        let outcome = coup.resolve(&mut self.view);
        self.view.render_outcome(outcome);

        self.counters.record(outcome);
        self.persist();
        self.view.render_counters(&self.counters);

        let report = RoundReport {
            player: coup.player().clone(),
            banker: coup.banker().clone(),
            player_score: coup.player().score(),
            banker_score: coup.banker().score(),
            natural: coup.is_natural(),
            outcome,
            counters: self.counters,
        };
        log::info!(
            "{:?}: player [{}] {} vs banker [{}] {}",
            outcome,
            report.player,
            report.player_score,
            report.banker,
            report.banker_score
        );
        report
    }

    /// Clear the display and zero the counters.
    pub fn reset_game(&mut self) {
        self.view.clear();
        self.counters.reset();
        self.persist();
        self.view.render_counters(&self.counters);
        log::info!("counters reset");
    }

    fn persist(&mut self) {
        if let Err(e) = storage::write_counters(&mut self.store, &self.config.storage_key, &self.counters) {
            log::warn!("saving counters failed: {}", e);
        }
    }

    #[must_use]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// RNG checkpoint; restore it with `with_rng_state` to replay rounds.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue from a saved RNG checkpoint.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store and view.
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }
}
