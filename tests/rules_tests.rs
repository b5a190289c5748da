//! Rule engine integration tests.
//!
//! These tests drive whole coups from prepared decks and check the
//! natural, Player and Banker drawing rules end to end.

use baccarat_sim::cards::{Card, Deck, Rank, Suit};
use baccarat_sim::rules::{banker_draws, Coup, Outcome, Side, Stage};
use baccarat_sim::table::{NullView, RecordingView, RenderEvent};

fn card(suit: Suit, value: u8) -> Card {
    Card::new(suit, Rank::new(value).expect("valid rank"))
}

/// Deck drawn as Player, Player, Banker, Banker, then the rest in order.
fn prepared(cards: &[(Suit, u8)]) -> Deck {
    Deck::from_draw_order(cards.iter().map(|&(s, v)| card(s, v))).unwrap()
}

/// Player A♠ 8♥ is a natural 9 against Banker 5♦ 2♣ = 7.
#[test]
fn test_player_natural_beats_seven() {
    let deck = prepared(&[
        (Suit::Spade, 1),
        (Suit::Heart, 8),
        (Suit::Diamond, 5),
        (Suit::Club, 2),
        (Suit::Club, 3),
        (Suit::Club, 4),
    ]);
    let mut view = NullView;
    let mut coup = Coup::deal(deck, &mut view).unwrap();

    assert_eq!(coup.player().score(), 9);
    assert_eq!(coup.banker().score(), 7);
    assert_eq!(coup.resolve(&mut view), Outcome::PlayerWin);
    assert_eq!(coup.player().len(), 2);
    assert_eq!(coup.banker().len(), 2);
    assert!(coup.is_natural());
}

/// Player 3♠ 3♥ = 6 stands; Banker 2♦ 2♠ = 4 draws.
#[test]
fn test_player_stands_banker_draws() {
    for third in 1..=13u8 {
        let deck = prepared(&[
            (Suit::Spade, 3),
            (Suit::Heart, 3),
            (Suit::Diamond, 2),
            (Suit::Spade, 2),
            (Suit::Club, third),
            (Suit::Spade, 9),
        ]);
        let mut view = NullView;
        let mut coup = Coup::deal(deck, &mut view).unwrap();
        coup.resolve(&mut view);

        assert_eq!(coup.player().len(), 2, "player stands on 6");
        assert_eq!(coup.banker().len(), 3, "banker draws on 4 when player stood");
        assert_eq!(coup.banker().third(), Some(card(Suit::Club, third)));
    }
}

/// Player 1♠ 1♥ = 2 draws an 8; Banker holding exactly 3 stands.
#[test]
fn test_banker_three_stands_on_player_eight() {
    let deck = prepared(&[
        (Suit::Spade, 1),
        (Suit::Heart, 1),
        (Suit::Diamond, 10),
        (Suit::Club, 3),
        (Suit::Diamond, 8),
        (Suit::Club, 9),
    ]);
    let mut view = NullView;
    let mut coup = Coup::deal(deck, &mut view).unwrap();
    let outcome = coup.resolve(&mut view);

    assert_eq!(coup.player().len(), 3);
    assert_eq!(coup.player().score(), 0);
    assert_eq!(coup.banker().len(), 2);
    assert_eq!(coup.banker().score(), 3);
    assert_eq!(outcome, Outcome::BankerWin);
    assert_eq!(coup.cards_remaining(), 1);
}

/// Banker on 3 draws when the Player's third card is anything but an 8.
#[test]
fn test_banker_three_draws_otherwise() {
    for third in [1u8, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 13] {
        let deck = prepared(&[
            (Suit::Spade, 1),
            (Suit::Heart, 1),
            (Suit::Heart, 10),
            (Suit::Club, 3),
            (Suit::Diamond, third),
            (Suit::Club, 9),
        ]);
        let mut view = NullView;
        let mut coup = Coup::deal(deck, &mut view).unwrap();
        coup.resolve(&mut view);
        assert_eq!(coup.banker().len(), 3, "third card {third}");
    }
}

/// A Player on 6 or 7 never draws; the Banker on 6 or 7 then stands too.
#[test]
fn test_both_stand() {
    let deck = prepared(&[
        (Suit::Spade, 7),
        (Suit::Heart, 10),
        (Suit::Diamond, 6),
        (Suit::Club, 13),
        (Suit::Club, 1),
        (Suit::Club, 2),
    ]);
    let mut view = NullView;
    let mut coup = Coup::deal(deck, &mut view).unwrap();
    assert_eq!(coup.resolve(&mut view), Outcome::PlayerWin);
    assert_eq!(coup.player().len(), 2);
    assert_eq!(coup.banker().len(), 2);
}

/// Equal final scores tie.
#[test]
fn test_tie() {
    let deck = prepared(&[
        (Suit::Spade, 4),
        (Suit::Heart, 3),
        (Suit::Diamond, 5),
        (Suit::Club, 2),
        (Suit::Club, 1),
        (Suit::Heart, 2),
    ]);
    let mut view = NullView;
    let mut coup = Coup::deal(deck, &mut view).unwrap();
    assert_eq!(coup.resolve(&mut view), Outcome::Tie);
}

/// The view sees every intermediate hand, in order, before the coup ends.
#[test]
fn test_view_sees_each_draw() {
    let deck = prepared(&[
        (Suit::Spade, 2),
        (Suit::Heart, 2),
        (Suit::Diamond, 1),
        (Suit::Club, 1),
        (Suit::Club, 5),
        (Suit::Heart, 6),
    ]);
    let mut view = RecordingView::new();
    let mut coup = Coup::deal(deck, &mut view).unwrap();
    assert_eq!(view.events().len(), 4);

    assert_eq!(coup.step(&mut view), Stage::NaturalCheck);
    assert_eq!(coup.step(&mut view), Stage::PlayerThirdCard);
    assert_eq!(view.events().len(), 4);

    assert_eq!(coup.step(&mut view), Stage::BankerThirdCard);
    assert_eq!(view.score(Side::Player), Some(9));
    assert_eq!(view.hand(Side::Player).map(|h| h.len()), Some(3));
    assert_eq!(view.events().len(), 6);

    assert_eq!(coup.step(&mut view), Stage::Resolved);
    assert_eq!(view.score(Side::Banker), Some(8));

    let scores: Vec<_> = view
        .events()
        .iter()
        .filter_map(|e| match e {
            RenderEvent::Score { side, score } => Some((*side, *score)),
            _ => None,
        })
        .collect();
    assert_eq!(
        scores,
        vec![(Side::Player, 4), (Side::Banker, 2), (Side::Player, 9), (Side::Banker, 8)]
    );
    assert_eq!(coup.outcome(), Some(Outcome::PlayerWin));
}

/// The engine agrees with the decision table over every dealt pair and
/// every Player third card value.
#[test]
fn test_exhaustive_two_card_deals() {
    for p1 in 1..=13u8 {
        for p2 in 1..=13u8 {
            for b1 in 1..=13u8 {
                for b2 in 1..=13u8 {
                    let dealt = [
                        card(Suit::Spade, p1),
                        card(Suit::Heart, p2),
                        card(Suit::Diamond, b1),
                        card(Suit::Club, b2),
                    ];
                    let rest: Vec<Card> = Deck::standard()
                        .cards()
                        .iter()
                        .copied()
                        .filter(|c| !dealt.contains(c))
                        .collect();

                    for ptv in 0..=9u8 {
                        // Four dealt cards of one value leave none to draw.
                        let Some(third) = rest.iter().copied().find(|c| c.point_value() == ptv)
                        else {
                            continue;
                        };
                        let order = dealt
                            .iter()
                            .copied()
                            .chain(std::iter::once(third))
                            .chain(rest.iter().copied().filter(|&c| c != third));
                        let deck = Deck::from_draw_order(order).unwrap();

                        let mut view = NullView;
                        let mut coup = Coup::deal(deck, &mut view).unwrap();
                        let player_initial = coup.player().score();
                        let banker_initial = coup.banker().score();
                        coup.resolve(&mut view);

                        let natural = player_initial >= 8 || banker_initial >= 8;
                        let player_drew = !natural && player_initial <= 5;
                        let banker_drew =
                            !natural && banker_draws(banker_initial, player_drew.then_some(ptv));

                        assert_eq!(coup.player().len(), if player_drew { 3 } else { 2 });
                        assert_eq!(coup.banker().len(), if banker_drew { 3 } else { 2 });
                        if player_drew {
                            assert_eq!(coup.player().third(), Some(third));
                        }
                    }
                }
            }
        }
    }
}
