//! Round phases, commands, and the read-only snapshot.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};
use crate::result::RoundResult;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Between rounds; bets can be staged and a round dealt.
    #[default]
    Idle,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Dealer reveals, draws, and settles.
    DealerTurn,
}

/// A player command, as accepted by [`Round::apply`](super::Round::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stage chips for the next round.
    PlaceBet(usize),
    /// Return the staged chips to the balance.
    ClearBet,
    /// Start a round with a freshly shuffled deck.
    Deal,
    /// Draw a card into the active hand.
    Hit,
    /// Close the active hand.
    Stand,
    /// Double the active hand's bet, draw one card, and close it.
    DoubleDown,
    /// Split the active pair into two hands.
    Split,
}

/// A point-in-time copy of everything a presentation layer may show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Chips available to bet.
    pub balance: usize,
    /// Chips staged for the next deal.
    pub pending_bet: usize,
    /// The player's hands, in play order.
    pub player_hands: Vec<Hand>,
    /// Live bet per hand; index `i` belongs to `player_hands[i]`.
    pub player_bets: Vec<usize>,
    /// Index of the hand being played.
    pub current_hand_index: usize,
    /// The dealer's hand.
    pub dealer_hand: DealerHand,
    /// Current phase.
    pub state: GameState,
    /// Advisory text for the player.
    pub status_message: String,
    /// Result of the most recently finished round.
    pub last_result: Option<RoundResult>,
}
