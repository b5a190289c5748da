//! Python bindings for the Baccarat table.
//!
//! # Quick Start
//!
//! ```python
//! import baccarat_sim as bac
//!
//! table = bac.BaccaratTable(seed=42, storage_dir="/tmp/baccarat")
//! report = table.play_round()
//! print(report.outcome, report.player_score, report.banker_score)
//! print(table.counters)
//! table.reset_game()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_table;

pub use py_core::*;
pub use py_table::*;

/// baccarat_sim: Baccarat rounds with persistent tallies.
#[pymodule]
fn baccarat_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyCounters>()?;
    m.add_class::<PyRoundReport>()?;
    m.add_class::<PyBaccaratTable>()?;

    Ok(())
}
