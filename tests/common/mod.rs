//! Shared helpers for the integration tests.

use core::time::Duration;

use bjtable::{Card, Deck, GameState, Round, Suit, TableOptions};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a test log subscriber once; level from `RUST_LOG`, default `warn`.
pub fn init_logging() {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

pub fn options(balance: usize) -> TableOptions {
    TableOptions::default()
        .with_starting_balance(balance)
        .with_dealer_delay(Duration::ZERO)
}

/// Stakes `bet` and deals from `draws`: two player cards, then the dealer's
/// up card and hole card, then whatever the round draws next.
pub fn dealt(balance: usize, bet: usize, draws: &[Card]) -> Round {
    init_logging();
    let mut round = Round::new(options(balance), 1);
    round.place_bet(bet).unwrap();
    round.deal_with_deck(Deck::from_draws(draws)).unwrap();
    round
}

/// Asserts the structural invariants that must hold after every command.
pub fn assert_invariants(round: &Round) {
    let bets = round.player_bets();
    assert_eq!(round.hands().len(), bets.len());
    assert!(round.hands().len() <= bjtable::MAX_HANDS);
    match round.state() {
        GameState::PlayerTurn => assert!(round.current_hand_index() < round.hands().len()),
        GameState::Idle => assert_eq!(bets.iter().sum::<usize>(), 0),
        GameState::DealerTurn => {}
    }
}
