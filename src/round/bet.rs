use alloc::format;
use alloc::vec;

use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::Hand;
use crate::result::HandOutcome;

use super::{GameState, Round};

/// Chip denominations a betting control offers.
pub const CHIP_VALUES: [usize; 5] = [5, 10, 25, 50, 100];

impl Round {
    /// Moves `amount` chips from the balance onto the staged bet.
    ///
    /// Repeated calls add up.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero, or the
    /// balance cannot cover it.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Idle {
            return Err(self.reject(BetError::InvalidState));
        }
        if amount == 0 {
            return Err(self.reject(BetError::ZeroBet));
        }
        if self.balance < amount {
            return Err(self.reject(BetError::InsufficientFunds));
        }

        self.balance -= amount;
        self.pending_bet += amount;
        self.set_message(format!("Current bet: {}", self.pending_bet));
        Ok(())
    }

    /// Returns the staged bet to the balance.
    ///
    /// Returns the refunded amount.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn clear_bet(&mut self) -> Result<usize, BetError> {
        if self.state != GameState::Idle {
            return Err(self.reject(BetError::InvalidState));
        }

        let refund = self.pending_bet;
        self.balance += refund;
        self.pending_bet = 0;
        self.set_message("Bet cleared.");
        Ok(refund)
    }

    fn check_deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Idle {
            return Err(self.reject(DealError::InvalidState));
        }
        if self.pending_bet == 0 {
            return Err(self.reject(DealError::NoBet));
        }
        Ok(())
    }

    /// Starts a round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or no bet is staged.
    pub fn deal(&mut self) -> Result<(), DealError> {
        self.check_deal()?;

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.deal_with_deck(deck)
    }

    /// Starts a round drawing from `deck` as given.
    ///
    /// The player receives the first two cards and the dealer the next two,
    /// the second of them face down. The staged bet moves onto the player's
    /// hand. If either side holds a natural the round is resolved at once
    /// and the state returns to [`GameState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, no bet is staged, or the
    /// deck holds fewer than four cards.
    pub fn deal_with_deck(&mut self, mut deck: Deck) -> Result<(), DealError> {
        self.check_deal()?;
        if deck.len() < 4 {
            return Err(self.reject(DealError::NotEnoughCards));
        }
        let (Some((p1, p2)), Some((d1, d2))) = (deck.draw_two(), deck.draw_two()) else {
            return Err(self.reject(DealError::NotEnoughCards));
        };

        let mut hand = Hand::new(self.pending_bet);
        hand.add_card(p1);
        hand.add_card(p2);

        self.dealer_hand.clear();
        self.dealer_hand.add_card(d1);
        self.dealer_hand.add_card(d2);

        tracing::debug!(bet = self.pending_bet, player = %p1, dealer_up = %d1, "dealt");

        self.hands = vec![hand];
        self.current_hand = 0;
        self.pending_bet = 0;
        self.deck = deck;
        self.last_result = None;
        self.set_message("Dealt cards. Checking for blackjack...");
        self.transition(GameState::PlayerTurn);

        self.resolve_naturals();
        Ok(())
    }

    /// Settles the round immediately when either opening hand is a natural.
    fn resolve_naturals(&mut self) {
        let player_natural = self.hands.first().is_some_and(Hand::is_natural);
        let dealer_natural = self.dealer_hand.is_blackjack();

        if !player_natural && !dealer_natural {
            self.set_message("Your turn! Hit, Stand, Double, or Split?");
            return;
        }

        let bet = self.hands[0].take_bet();
        let (outcome, payout, message) = match (player_natural, dealer_natural) {
            (true, true) => (HandOutcome::Push, bet, "Push! Both have Blackjack."),
            // 3:2, odd chips rounded down
            (true, false) => (
                HandOutcome::Blackjack,
                bet + bet * 3 / 2,
                "Blackjack! You win 3:2 payout!",
            ),
            _ => (HandOutcome::Lose, 0, "Dealer has Blackjack! You lose."),
        };

        self.balance += payout;
        self.dealer_hand.reveal_hole();
        self.set_message(message);

        let result = self.round_result(vec![self.hand_result(0, outcome, payout)]);
        self.finish_round(result);
    }
}
