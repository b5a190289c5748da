//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;
use crate::rules::Hand;
use crate::table::Counters;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Rank, 1 (Ace) to 13 (King).
    #[getter]
    fn rank(&self) -> u8 {
        self.0.rank.value()
    }

    /// Suit symbol.
    #[getter]
    fn suit(&self) -> String {
        self.0.suit.symbol().to_string()
    }

    /// Baccarat point value.
    #[getter]
    fn point_value(&self) -> u8 {
        self.0.point_value()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) fn py_cards(hand: &Hand) -> Vec<PyCard> {
    hand.cards().iter().copied().map(PyCard).collect()
}

/// Python wrapper for Counters.
#[pyclass(name = "Counters")]
#[derive(Clone, Debug)]
pub struct PyCounters(pub Counters);

#[pymethods]
impl PyCounters {
    #[getter]
    fn player(&self) -> u64 {
        self.0.player
    }

    #[getter]
    fn banker(&self) -> u64 {
        self.0.banker
    }

    #[getter]
    fn ties(&self) -> u64 {
        self.0.ties
    }

    /// Rounds played.
    fn total(&self) -> u64 {
        self.0.total()
    }

    fn __repr__(&self) -> String {
        format!(
            "Counters(player={}, banker={}, ties={})",
            self.0.player, self.0.banker, self.0.ties
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
