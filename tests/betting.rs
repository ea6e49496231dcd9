//! Bet staging, dealing, and immediate naturals.

mod common;

use bjtable::{
    BetError, CHIP_VALUES, Command, CommandError, DealError, Deck, GameState, HandOutcome, Round,
    Suit,
};
use common::{assert_invariants, card, dealt, options};

#[test]
fn place_and_clear_bet_move_chips() {
    let mut round = Round::new(options(1000), 1);

    round.place_bet(100).unwrap();
    round.place_bet(25).unwrap();
    assert_eq!(round.balance(), 875);
    assert_eq!(round.pending_bet(), 125);

    assert_eq!(round.clear_bet(), Ok(125));
    assert_eq!(round.balance(), 1000);
    assert_eq!(round.pending_bet(), 0);
}

#[test]
fn bet_errors_leave_state_alone() {
    let mut round = Round::new(options(20), 1);

    assert_eq!(round.place_bet(0), Err(BetError::ZeroBet));
    assert_eq!(round.place_bet(25), Err(BetError::InsufficientFunds));
    assert_eq!(round.status_message(), "not enough balance to place that bet");
    assert_eq!(round.balance(), 20);
    assert_eq!(round.pending_bet(), 0);
}

#[test]
fn betting_is_closed_during_a_round() {
    let mut round = dealt(
        1000,
        100,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 8),
            card(Suit::Spades, 10),
            card(Suit::Diamonds, 7),
        ],
    );
    assert_eq!(round.state(), GameState::PlayerTurn);

    assert_eq!(round.place_bet(5), Err(BetError::InvalidState));
    assert_eq!(round.clear_bet(), Err(BetError::InvalidState));
    assert_eq!(round.deal(), Err(DealError::InvalidState));
    assert_eq!(round.balance(), 900);
    assert_invariants(&round);
}

#[test]
fn deal_needs_a_bet_and_four_cards() {
    let mut round = Round::new(options(1000), 1);
    assert_eq!(round.deal(), Err(DealError::NoBet));
    assert_eq!(round.state(), GameState::Idle);

    round.place_bet(10).unwrap();
    let short = Deck::from_draws(&[card(Suit::Hearts, 2), card(Suit::Clubs, 3)]);
    assert_eq!(round.deal_with_deck(short), Err(DealError::NotEnoughCards));
    assert_eq!(round.pending_bet(), 10);
    assert_eq!(round.state(), GameState::Idle);
}

#[test]
fn deal_moves_the_staged_bet_onto_the_first_hand() {
    let round = dealt(
        1000,
        100,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 8),
            card(Suit::Spades, 10),
            card(Suit::Diamonds, 7),
        ],
    );

    assert_eq!(round.pending_bet(), 0);
    assert_eq!(round.player_bets(), vec![100]);
    assert_eq!(round.hands()[0].cards(), &[card(Suit::Hearts, 9), card(Suit::Clubs, 8)]);
    assert_eq!(round.dealer_hand().len(), 2);
    assert!(round.dealer_hand().is_hidden(1));
    assert_eq!(round.current_hand_index(), 0);
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn shuffled_deal_starts_a_round() {
    let mut round = Round::new(options(1000), 42);
    round.place_bet(CHIP_VALUES[4]).unwrap();
    round.deal().unwrap();

    assert_eq!(round.hands().len(), 1);
    assert_eq!(round.hands()[0].len(), 2);
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.cards_remaining(), 48);
    assert_invariants(&round);
}

#[test]
fn player_natural_pays_three_to_two() {
    let round = dealt(
        1000,
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 9),
        ],
    );

    assert_eq!(round.state(), GameState::Idle);
    assert_eq!(round.balance(), 1150);
    assert_eq!(round.player_bets(), vec![0]);
    assert!(round.dealer_hand().is_hole_revealed());

    let result = round.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 250);
    assert_eq!(result.net(), 150);
    assert_invariants(&round);
}

#[test]
fn odd_natural_payout_rounds_down() {
    let round = dealt(
        100,
        25,
        &[
            card(Suit::Spades, 12),
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 5),
        ],
    );

    // 25 + floor(37.5)
    assert_eq!(round.balance(), 75 + 62);
}

#[test]
fn both_naturals_push() {
    let round = dealt(
        1000,
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 12),
        ],
    );

    assert_eq!(round.state(), GameState::Idle);
    assert_eq!(round.balance(), 1000);
    assert_eq!(round.status_message(), "Push! Both have Blackjack.");
    assert_eq!(
        round.last_result().unwrap().hands[0].outcome,
        HandOutcome::Push
    );
}

#[test]
fn dealer_natural_takes_the_bet() {
    let round = dealt(
        1000,
        100,
        &[
            card(Suit::Spades, 9),
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 1),
        ],
    );

    assert_eq!(round.state(), GameState::Idle);
    assert_eq!(round.balance(), 900);
    assert_eq!(round.player_bets(), vec![0]);
    assert_eq!(
        round.last_result().unwrap().hands[0].outcome,
        HandOutcome::Lose
    );
}

#[test]
fn balance_carries_into_the_next_round() {
    let mut round = dealt(
        1000,
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 9),
        ],
    );
    round.place_bet(50).unwrap();
    round
        .deal_with_deck(Deck::from_draws(&[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
        ]))
        .unwrap();

    assert_eq!(round.balance(), 1100);
    assert_eq!(round.hands().len(), 1);
    assert_eq!(round.player_bets(), vec![50]);
    assert!(round.last_result().is_none());
}

#[test]
fn apply_dispatches_and_wraps_errors() {
    let mut round = Round::new(options(100), 3);

    assert_eq!(
        round.apply(Command::PlaceBet(0)),
        Err(CommandError::Bet(BetError::ZeroBet))
    );
    assert_eq!(
        round.apply(Command::Deal),
        Err(CommandError::Deal(DealError::NoBet))
    );
    round.apply(Command::PlaceBet(10)).unwrap();
    round.apply(Command::ClearBet).unwrap();
    assert_eq!(round.balance(), 100);
}
