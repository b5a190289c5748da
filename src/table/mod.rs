//! The round controller and its collaborators.
//!
//! A `Table` ties the rule engine to a `View` and a `KeyValueStore`:
//! `play_round` deals, resolves, counts and persists one round;
//! `reset_game` clears the display and zeroes the counters.

pub mod controller;
pub mod counters;
pub mod view;

pub use controller::{RoundReport, Table};
pub use counters::Counters;
pub use view::{NullView, RecordingView, RenderEvent, TextView, View};
