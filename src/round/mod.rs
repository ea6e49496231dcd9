//! The round state machine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::CommandError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::{HandOutcome, HandResult, RoundResult};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use bet::CHIP_VALUES;
pub use dealer::{DEALER_STANDS_ON, DealerStep};
pub use state::{Command, GameState, Snapshot};

/// The most hands a player can hold: the dealt hand plus five splits.
pub const MAX_HANDS: usize = 6;

/// A single-player blackjack session.
///
/// `Round` owns the balance, the staged bet, the per-round hands and deck,
/// and the current [`GameState`]. Every command is a method taking
/// `&mut self`; a command either applies fully or returns an error and
/// leaves the state untouched.
///
/// The dealer's turn is driven one [`DealerStep`] at a time so a caller can
/// pace it; see [`Round::dealer_step`] and [`Table`](crate::Table).
#[derive(Debug, Clone)]
pub struct Round {
    options: TableOptions,
    balance: usize,
    pending_bet: usize,
    deck: Deck,
    hands: Vec<Hand>,
    current_hand: usize,
    dealer_hand: DealerHand,
    state: GameState,
    status_message: String,
    last_result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a session seeded with the starting balance from `options`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameState, Round, TableOptions};
    ///
    /// let round = Round::new(TableOptions::default(), 42);
    /// assert_eq!(round.balance(), 1000);
    /// assert_eq!(round.state(), GameState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            balance: options.starting_balance,
            pending_bet: 0,
            deck: Deck::from_draws(&[]),
            hands: Vec::new(),
            current_hand: 0,
            dealer_hand: DealerHand::new(),
            state: GameState::Idle,
            status_message: String::new(),
            last_result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Applies any command.
    ///
    /// # Errors
    ///
    /// Returns the command's own error when its preconditions do not hold.
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::PlaceBet(amount) => self.place_bet(amount)?,
            Command::ClearBet => {
                self.clear_bet()?;
            }
            Command::Deal => self.deal()?,
            Command::Hit => {
                self.hit()?;
            }
            Command::Stand => self.stand()?,
            Command::DoubleDown => {
                self.double_down()?;
            }
            Command::Split => self.split()?,
        }
        Ok(())
    }

    /// Moves the round to `to`. All phase changes go through here.
    fn transition(&mut self, to: GameState) {
        let from = self.state;
        if from != to {
            tracing::debug!(?from, ?to, "round transition");
        }
        self.state = to;
    }

    /// Records a rejected command as the advisory and hands the error back.
    fn reject<E: fmt::Display>(&mut self, err: E) -> E {
        tracing::debug!(error = %err, state = ?self.state, "command rejected");
        self.status_message = err.to_string();
        err
    }

    fn set_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Records the result and returns to [`GameState::Idle`].
    fn finish_round(&mut self, result: RoundResult) {
        tracing::info!(
            hands = result.hands.len(),
            payout = result.total_payout(),
            net = result.net(),
            balance = self.balance,
            "round finished"
        );
        self.last_result = Some(result);
        self.transition(GameState::Idle);
    }

    fn hand_result(&self, hand_index: usize, outcome: HandOutcome, payout: usize) -> HandResult {
        let hand = &self.hands[hand_index];
        HandResult {
            hand_index,
            outcome,
            bet: hand.staked(),
            payout,
            player_value: hand.value(),
            dealer_value: self.dealer_hand.value(),
        }
    }

    fn round_result(&self, hands: Vec<HandResult>) -> RoundResult {
        RoundResult {
            hands,
            dealer_value: self.dealer_hand.value(),
            dealer_bust: self.dealer_hand.is_bust(),
            dealer_blackjack: self.dealer_hand.is_blackjack(),
        }
    }

    fn has_live_bets(&self) -> bool {
        self.hands.iter().any(|hand| hand.bet() > 0)
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the bet staged for the next deal.
    #[must_use]
    pub const fn pending_bet(&self) -> usize {
        self.pending_bet
    }

    /// Returns the player's hands for the current (or last) round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the live bet of every hand, in hand order.
    #[must_use]
    pub fn player_bets(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::bet).collect()
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand
    }

    /// Returns the hand being played, if the player is on turn.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.state == GameState::PlayerTurn {
            self.hands.get(self.current_hand)
        } else {
            None
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the advisory text for the player.
    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns the result of the last finished round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards left in this round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Copies the observable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            balance: self.balance,
            pending_bet: self.pending_bet,
            player_hands: self.hands.clone(),
            player_bets: self.player_bets(),
            current_hand_index: self.current_hand,
            dealer_hand: self.dealer_hand.clone(),
            state: self.state,
            status_message: self.status_message.clone(),
            last_result: self.last_result.clone(),
        }
    }
}
