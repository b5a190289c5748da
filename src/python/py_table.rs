//! Table bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Locale, TableConfig};
use crate::rules::Outcome;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::table::{RecordingView, RoundReport, Table};

use super::py_core::{py_cards, PyCard, PyCounters};

type DynStore = Box<dyn KeyValueStore + Send>;

/// Python wrapper for a round summary.
#[pyclass(name = "RoundReport")]
#[derive(Clone, Debug)]
pub struct PyRoundReport(pub RoundReport);

#[pymethods]
impl PyRoundReport {
    #[getter]
    fn player_cards(&self) -> Vec<PyCard> {
        py_cards(&self.0.player)
    }

    #[getter]
    fn banker_cards(&self) -> Vec<PyCard> {
        py_cards(&self.0.banker)
    }

    #[getter]
    fn player_score(&self) -> u8 {
        self.0.player_score
    }

    #[getter]
    fn banker_score(&self) -> u8 {
        self.0.banker_score
    }

    #[getter]
    fn natural(&self) -> bool {
        self.0.natural
    }

    /// "player", "banker" or "tie".
    #[getter]
    fn outcome(&self) -> &'static str {
        match self.0.outcome {
            Outcome::PlayerWin => "player",
            Outcome::BankerWin => "banker",
            Outcome::Tie => "tie",
        }
    }

    #[getter]
    fn counters(&self) -> PyCounters {
        PyCounters(self.0.counters)
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundReport(player=[{}] {}, banker=[{}] {}, outcome={})",
            self.0.player,
            self.0.player_score,
            self.0.banker,
            self.0.banker_score,
            self.outcome()
        )
    }
}

/// Python wrapper for Table.
///
/// Counters live in memory unless `storage_dir` is given, in which case
/// they are kept in `<storage_dir>/<storage_key>.json`. Only the current
/// display state is kept; render events are dropped after every call.
#[pyclass(name = "BaccaratTable")]
pub struct PyBaccaratTable {
    table: Table<DynStore, RecordingView>,
}

#[pymethods]
impl PyBaccaratTable {
    /// Open a table.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic rounds (random when omitted)
    /// - storage_dir: Directory for persisted counters
    /// - storage_key: Identifier the counters are stored under
    /// - locale: "en" or "es"
    #[new]
    #[pyo3(signature = (
        seed = None,
        storage_dir = None,
        storage_key = None,
        locale = "en"
    ))]
    fn new(
        seed: Option<u64>,
        storage_dir: Option<String>,
        storage_key: Option<String>,
        locale: &str,
    ) -> PyResult<Self> {
        let locale = match locale {
            "en" => Locale::English,
            "es" => Locale::Spanish,
            other => {
                return Err(PyValueError::new_err(format!("unknown locale {:?}", other)));
            }
        };

        let mut config = TableConfig::default().with_locale(locale);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        if let Some(key) = storage_key {
            config = config.with_storage_key(key);
        }

        let store: DynStore = match storage_dir {
            Some(dir) => {
                if !FileStore::accepts_key(&config.storage_key) {
                    return Err(PyValueError::new_err(format!(
                        "storage_key {:?} must be non-empty ASCII letters, digits, '_' or '-'",
                        config.storage_key
                    )));
                }
                Box::new(FileStore::new(dir))
            }
            None => Box::new(MemoryStore::new()),
        };

        let mut table = Table::open(config, store, RecordingView::new());
        table.view_mut().take_events();
        Ok(Self { table })
    }

    /// Play one round ("deal").
    fn play_round(&mut self) -> PyRoundReport {
        let report = self.table.play_round();
        self.table.view_mut().take_events();
        PyRoundReport(report)
    }

    /// Clear the table and zero the counters ("reset").
    fn reset_game(&mut self) {
        self.table.reset_game();
        self.table.view_mut().take_events();
    }

    /// Current counters.
    #[getter]
    fn counters(&self) -> PyCounters {
        PyCounters(*self.table.counters())
    }

    /// Identifier the counters are stored under.
    #[getter]
    fn storage_key(&self) -> String {
        self.table.config().storage_key.clone()
    }

    /// Seed the table was opened with.
    #[getter]
    fn seed(&self) -> u64 {
        self.table.rng_state().seed
    }

    fn __repr__(&self) -> String {
        let c = self.table.counters();
        format!(
            "BaccaratTable(player={}, banker={}, ties={})",
            c.player, c.banker, c.ties
        )
    }
}
