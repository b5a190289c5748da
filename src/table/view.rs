//! Rendering collaborators.
//!
//! The table pushes everything it wants shown through `View`. Three views
//! ship with the crate:
//!
//! - `TextView`: writes localized lines to any `io::Write`
//! - `RecordingView`: keeps the event log and the current display state,
//!   for headless use and tests
//! - `NullView`: discards everything

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::counters::Counters;
use crate::core::Locale;
use crate::rules::{Hand, HandObserver, Outcome, Side};

/// Where a table shows its state.
pub trait View {
    /// Show the cards of one side.
    fn render_hand(&mut self, side: Side, hand: &Hand);

    /// Show the score of one side.
    fn render_score(&mut self, side: Side, score: u8);

    /// Show the round result.
    fn render_outcome(&mut self, outcome: Outcome);

    /// Show the counters and make the counters panel visible.
    fn render_counters(&mut self, counters: &Counters);

    /// Clear hands, scores and result. Counters are left alone.
    fn clear(&mut self);
}

/// Every view follows the coup: each hand change renders cards, then score.
impl<V: View + ?Sized> HandObserver for V {
    fn hand_changed(&mut self, side: Side, hand: &Hand) {
        self.render_hand(side, hand);
        self.render_score(side, hand.score());
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl View for NullView {
    fn render_hand(&mut self, _: Side, _: &Hand) {}
    fn render_score(&mut self, _: Side, _: u8) {}
    fn render_outcome(&mut self, _: Outcome) {}
    fn render_counters(&mut self, _: &Counters) {}
    fn clear(&mut self) {}
}

/// One call made on a `RecordingView`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEvent {
    Hand { side: Side, hand: Hand },
    Score { side: Side, score: u8 },
    Outcome(Outcome),
    Counters(Counters),
    Clear,
}

/// Records render calls and mirrors what a page would currently display.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    events: Vec<RenderEvent>,
    player_hand: Option<Hand>,
    banker_hand: Option<Hand>,
    player_score: Option<u8>,
    banker_score: Option<u8>,
    outcome: Option<Outcome>,
    counters: Option<Counters>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Drain the event log, keeping the display state.
    pub fn take_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> Option<&Hand> {
        match side {
            Side::Player => self.player_hand.as_ref(),
            Side::Banker => self.banker_hand.as_ref(),
        }
    }

    #[must_use]
    pub fn score(&self, side: Side) -> Option<u8> {
        match side {
            Side::Player => self.player_score,
            Side::Banker => self.banker_score,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Counters on display, `None` while the panel is hidden.
    #[must_use]
    pub fn counters(&self) -> Option<&Counters> {
        self.counters.as_ref()
    }
}

impl View for RecordingView {
    fn render_hand(&mut self, side: Side, hand: &Hand) {
        match side {
            Side::Player => self.player_hand = Some(hand.clone()),
            Side::Banker => self.banker_hand = Some(hand.clone()),
        }
        self.events.push(RenderEvent::Hand { side, hand: hand.clone() });
    }

    fn render_score(&mut self, side: Side, score: u8) {
        match side {
            Side::Player => self.player_score = Some(score),
            Side::Banker => self.banker_score = Some(score),
        }
        self.events.push(RenderEvent::Score { side, score });
    }

    fn render_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.events.push(RenderEvent::Outcome(outcome));
    }

    fn render_counters(&mut self, counters: &Counters) {
        self.counters = Some(*counters);
        self.events.push(RenderEvent::Counters(*counters));
    }

    fn clear(&mut self) {
        self.player_hand = None;
        self.banker_hand = None;
        self.player_score = None;
        self.banker_score = None;
        self.outcome = None;
        self.events.push(RenderEvent::Clear);
    }
}

/// Writes one localized line per render call.
///
/// ```
/// use baccarat_sim::core::Locale;
/// use baccarat_sim::rules::Side;
/// use baccarat_sim::table::{TextView, View};
///
/// let mut view = TextView::new(Vec::new(), Locale::Spanish);
/// view.render_score(Side::Banker, 6);
/// assert_eq!(String::from_utf8(view.into_inner()).unwrap(), "Banca Puntos: 6\n");
/// ```
#[derive(Debug)]
pub struct TextView<W> {
    out: W,
    locale: Locale,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W, locale: Locale) -> Self {
        Self { out, locale }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("text view write failed: {}", e);
        }
    }
}

impl<W: Write> View for TextView<W> {
    fn render_hand(&mut self, side: Side, hand: &Hand) {
        let name = self.locale.side_name(side);
        self.line(format_args!("{}: {}", name, hand));
    }

    fn render_score(&mut self, side: Side, score: u8) {
        let name = self.locale.side_name(side);
        let text = self.locale.score_text(score);
        self.line(format_args!("{} {}", name, text));
    }

    fn render_outcome(&mut self, outcome: Outcome) {
        let text = self.locale.outcome_text(outcome);
        self.line(format_args!("{}", text));
    }

    fn render_counters(&mut self, counters: &Counters) {
        let [player, banker, ties] = self.locale.counter_labels();
        self.line(format_args!(
            "{}: {} | {}: {} | {}: {}",
            player, counters.player, banker, counters.banker, ties, counters.ties
        ));
    }

    fn clear(&mut self) {
        self.line(format_args!(""));
    }
}
