//! The coup state machine: naturals and third-card draws.
//!
//! A `Coup` owns the deck for one round and walks
//! `Dealt -> NaturalCheck -> PlayerThirdCard -> BankerThirdCard -> Resolved`.
//! Every change to a hand is reported to a `HandObserver` before the machine
//! moves on, so a view sees the intermediate states, not just the final one.
//!
//! ## Drawing rules
//!
//! - Either side holding 8 or 9 after the deal is a natural; nobody draws.
//! - Player draws on 0-5 and stands on 6-7.
//! - If the Player stood, the Banker draws on 0-5.
//! - If the Player drew, the Banker follows `banker_draws` keyed on the
//!   Banker's score and the point value of the Player's third card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::hand::{Hand, Side};
use crate::cards::{Card, Deck};
use crate::core::RandomSource;

/// Most cards a single coup can consume: four dealt plus two third cards.
pub const ROUND_CARD_LIMIT: usize = 6;

/// Errors raised while setting up a coup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The deck cannot cover a full coup.
    #[error("deck holds {remaining} cards, a coup needs {ROUND_CARD_LIMIT}")]
    ShortDeck { remaining: usize },
}

/// Result of a resolved coup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    BankerWin,
    Tie,
}

impl Outcome {
    /// Higher score wins, equal scores tie.
    #[must_use]
    pub fn from_scores(player: u8, banker: u8) -> Self {
        match player.cmp(&banker) {
            std::cmp::Ordering::Greater => Outcome::PlayerWin,
            std::cmp::Ordering::Less => Outcome::BankerWin,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Stages of a coup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Dealt,
    NaturalCheck,
    PlayerThirdCard,
    BankerThirdCard,
    Resolved,
}

/// Receives every hand change during a coup.
pub trait HandObserver {
    fn hand_changed(&mut self, side: Side, hand: &Hand);
}

/// True for a natural total.
#[must_use]
pub const fn is_natural(score: u8) -> bool {
    score == 8 || score == 9
}

/// Whether the Player takes a third card.
#[must_use]
pub const fn player_draws(player_score: u8) -> bool {
    player_score <= 5
}

/// Whether the Banker takes a third card.
///
/// `player_third` is the point value of the Player's third card, or `None`
/// if the Player stood, in which case the Banker draws on 0-5.
///
/// ```
/// use baccarat_sim::rules::banker_draws;
///
/// assert!(banker_draws(5, None));
/// assert!(!banker_draws(3, Some(8)));
/// assert!(banker_draws(6, Some(7)));
/// ```
#[must_use]
pub const fn banker_draws(banker_score: u8, player_third: Option<u8>) -> bool {
    match player_third {
        None => banker_score <= 5,
        Some(ptv) => match banker_score {
            0..=2 => true,
            3 => ptv != 8,
            4 => ptv >= 2 && ptv <= 7,
            5 => ptv >= 4 && ptv <= 7,
            6 => ptv == 6 || ptv == 7,
            _ => false,
        },
    }
}

/// One round of Baccarat in progress.
#[derive(Clone, Debug)]
pub struct Coup {
    deck: Deck,
    player: Hand,
    banker: Hand,
    stage: Stage,
}

impl Coup {
    /// Deal two cards each, Player first, and report both hands.
    ///
    /// Cards go Player, Player, Banker, Banker off the top of the deck.
    pub fn deal<O: HandObserver + ?Sized>(deck: Deck, observer: &mut O) -> Result<Self, RulesError> {
        if deck.len() < ROUND_CARD_LIMIT {
            return Err(RulesError::ShortDeck { remaining: deck.len() });
        }
        Ok(Self::deal_unchecked(deck, observer))
    }

    /// Build a fresh standard deck, shuffle it and deal.
    pub fn shuffled<R, O>(rng: &mut R, observer: &mut O) -> Self
    where
        R: RandomSource + ?Sized,
        O: HandObserver + ?Sized,
    {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        Self::deal_unchecked(deck, observer)
    }

    fn deal_unchecked<O: HandObserver + ?Sized>(mut deck: Deck, observer: &mut O) -> Self {
        let mut player = Hand::new();
        let mut banker = Hand::new();
        for side in [Side::Player, Side::Player, Side::Banker, Side::Banker] {
            let Some(card) = deck.draw() else {
                break;
            };
            match side {
                Side::Player => player.push(card),
                Side::Banker => banker.push(card),
            }
        }

        log::debug!("dealt player [{}] banker [{}]", player, banker);
        observer.hand_changed(Side::Player, &player);
        observer.hand_changed(Side::Banker, &banker);

        Self {
            deck,
            player,
            banker,
            stage: Stage::Dealt,
        }
    }

    /// Perform one transition and return the new stage.
    ///
    /// Calling this on a resolved coup does nothing.
    pub fn step<O: HandObserver + ?Sized>(&mut self, observer: &mut O) -> Stage {
        self.stage = match self.stage {
            Stage::Dealt => Stage::NaturalCheck,
            Stage::NaturalCheck => {
                if is_natural(self.player.score()) || is_natural(self.banker.score()) {
                    log::debug!(
                        "natural: player {} banker {}",
                        self.player.score(),
                        self.banker.score()
                    );
                    Stage::Resolved
                } else {
                    Stage::PlayerThirdCard
                }
            }
            Stage::PlayerThirdCard => {
                if player_draws(self.player.score()) {
                    self.draw_to(Side::Player, observer);
                }
                Stage::BankerThirdCard
            }
            Stage::BankerThirdCard => {
                let ptv = self.player.third().map(Card::point_value);
                if banker_draws(self.banker.score(), ptv) {
                    self.draw_to(Side::Banker, observer);
                }
                Stage::Resolved
            }
            Stage::Resolved => Stage::Resolved,
        };
        self.stage
    }

    /// Step until resolved and return the outcome.
    pub fn resolve<O: HandObserver + ?Sized>(&mut self, observer: &mut O) -> Outcome {
        while self.step(observer) != Stage::Resolved {}
        Outcome::from_scores(self.player.score(), self.banker.score())
    }

    fn draw_to<O: HandObserver + ?Sized>(&mut self, side: Side, observer: &mut O) {
        // A coup always starts with at least ROUND_CARD_LIMIT cards.
        let Some(card) = self.deck.draw() else {
            return;
        };
        let hand = match side {
            Side::Player => &mut self.player,
            Side::Banker => &mut self.banker,
        };
        hand.push(card);
        log::debug!("{} draws {} for {}", side, card, hand.score());
        observer.hand_changed(side, hand);
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Outcome, once resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        (self.stage == Stage::Resolved)
            .then(|| Outcome::from_scores(self.player.score(), self.banker.score()))
    }

    /// True if either side was dealt a natural.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.player.is_natural() || self.banker.is_natural()
    }

    #[must_use]
    pub fn player(&self) -> &Hand {
        &self.player
    }

    #[must_use]
    pub fn banker(&self) -> &Hand {
        &self.banker
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
