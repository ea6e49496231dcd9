//! Property tests for evaluation, shuffling, and round invariants.

mod common;

use bjtable::{
    CHIP_VALUES, Card, Command, Deck, GameState, Hand, Round, Suit, hand_value, is_soft,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
    ]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_suit(), 1u8..=13u8).prop_map(|(s, r)| Card::new(s, r))
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0..CHIP_VALUES.len()).prop_map(|i| Command::PlaceBet(CHIP_VALUES[i])),
        Just(Command::ClearBet),
        Just(Command::Deal),
        Just(Command::Deal),
        Just(Command::Hit),
        Just(Command::Stand),
        Just(Command::DoubleDown),
        Just(Command::Split),
    ]
}

fn sorted(cards: &[Card]) -> Vec<(u8, u8)> {
    let mut keys: Vec<(u8, u8)> = cards.iter().map(|c| (c.suit as u8, c.rank)).collect();
    keys.sort_unstable();
    keys
}

proptest! {
    #[test]
    fn value_is_best_total_without_busting_an_ace(cards in prop::collection::vec(any_card(), 0..8)) {
        let hard: u32 = cards
            .iter()
            .map(|c| if c.is_ace() { 1 } else { u32::from(c.value()) })
            .sum();
        let has_ace = cards.iter().any(Card::is_ace);
        let best = if has_ace && hard + 10 <= 21 { hard + 10 } else { hard };

        prop_assert_eq!(u32::from(hand_value(&cards)), best);
        prop_assert_eq!(is_soft(&cards), has_ace && hard + 10 <= 21);
    }

    #[test]
    fn shuffle_preserves_the_cards(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        prop_assert_eq!(sorted(deck.cards()), sorted(Deck::new().cards()));
    }

    #[test]
    fn commands_keep_chips_and_bets_consistent(
        seed in any::<u64>(),
        commands in prop::collection::vec(any_command(), 1..80),
    ) {
        let start = 500;
        let mut round = Round::new(common::options(start), seed);
        let mut net: isize = 0;

        for command in commands {
            let before = round.state();
            let accepted = round.apply(command).is_ok();

            if round.state() == GameState::DealerTurn {
                let result = round.play_dealer();
                prop_assert!(result.is_some());
                net += result.map_or(0, |r| r.net());
            } else if round.state() == GameState::Idle
                && accepted
                && (before != GameState::Idle || command == Command::Deal)
            {
                net += round.last_result().map_or(0, bjtable::RoundResult::net);
            }

            common::assert_invariants(&round);
            let held = (round.balance() + round.pending_bet()) as isize;
            let expected = start as isize + net;
            match round.state() {
                GameState::Idle => prop_assert_eq!(held, expected),
                GameState::PlayerTurn => {
                    let live: usize = round.player_bets().iter().sum();
                    let staked: usize = round.hands().iter().map(Hand::staked).sum();
                    // Busted hands have lost their stake before settlement.
                    prop_assert_eq!(held + staked as isize, expected);
                    if round.hands().iter().all(|hand| hand.bet() == hand.staked()) {
                        prop_assert_eq!(held + live as isize, expected);
                    }
                }
                GameState::DealerTurn => {}
            }
        }
    }
}
