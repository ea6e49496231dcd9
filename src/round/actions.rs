use alloc::format;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};

use super::{GameState, MAX_HANDS, Round};

impl Round {
    /// Returns the active hand index, rejecting the call outside the player's turn.
    fn active_index(&mut self) -> Result<usize, ActionError> {
        if self.state != GameState::PlayerTurn || self.current_hand >= self.hands.len() {
            return Err(self.reject(ActionError::InvalidState));
        }
        Ok(self.current_hand)
    }

    /// Closes the active hand and moves play on.
    ///
    /// The next hand becomes active if there is one. Otherwise the dealer
    /// takes over, unless every bet is already lost, in which case the hole
    /// card is shown and the round ends without dealer play.
    fn advance(&mut self) {
        let next = self.current_hand + 1;
        if next < self.hands.len() {
            self.current_hand = next;
            self.set_message(format!("Now playing Hand {}", next + 1));
            return;
        }

        if self.has_live_bets() {
            self.set_message("All hands played. Dealer's turn...");
            self.transition(GameState::DealerTurn);
            return;
        }

        self.dealer_hand.reveal_hole();
        let result = self.settlement();
        self.set_message("All player hands busted. Dealer's card revealed. Round over.");
        self.finish_round(result);
    }

    /// Player action: Hit (draw a card into the active hand).
    ///
    /// A bust loses the hand's bet and moves play to the next hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let index = self.active_index()?;
        let Some(card) = self.deck.draw() else {
            return Err(self.reject(ActionError::NoCards));
        };

        let hand = &mut self.hands[index];
        hand.add_card(card);
        let value = hand.value();

        if hand.is_bust() {
            hand.take_bet();
            self.set_message(format!("Hand {} busted with {value}!", index + 1));
            self.advance();
        } else {
            self.set_message(format!(
                "Hand {} has {value}. Hit, Stand, or Double?",
                index + 1
            ));
        }

        Ok(card)
    }

    /// Player action: Stand (keep the active hand as it is).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let index = self.active_index()?;

        let hand = &mut self.hands[index];
        hand.set_status(HandStatus::Stood);
        let value = hand.value();

        self.set_message(format!("Hand {} stands at {value}.", index + 1));
        self.advance();
        Ok(())
    }

    /// Player action: Double down (double the bet, take one card, close the hand).
    ///
    /// Allowed on any active hand, including one produced by a split.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the balance cannot
    /// match the hand's bet, or the deck is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let index = self.active_index()?;
        let bet = self.hands[index].bet();
        if self.balance < bet {
            return Err(self.reject(ActionError::InsufficientFunds));
        }
        let Some(card) = self.deck.draw() else {
            return Err(self.reject(ActionError::NoCards));
        };

        self.balance -= bet;
        let hand = &mut self.hands[index];
        hand.double_bet();
        hand.add_card(card);
        let value = hand.value();

        if hand.is_bust() {
            hand.take_bet();
            self.set_message(format!(
                "Hand {} busted on Double with {value}!",
                index + 1
            ));
        } else {
            hand.set_status(HandStatus::Doubled);
            self.set_message(format!("Hand {} doubles to {value}.", index + 1));
        }

        self.advance();
        Ok(card)
    }

    /// Player action: Split the active pair into two hands.
    ///
    /// The active hand keeps its first card; the second card starts a new
    /// hand at the end of the hand list carrying a copy of the bet. Each of
    /// the two hands then draws one card, the active hand first. Play stays
    /// on the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player already
    /// holds [`MAX_HANDS`] hands, the active hand is not a splittable pair,
    /// the balance cannot match the bet, or fewer than two cards remain.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let index = self.active_index()?;
        if self.hands.len() >= MAX_HANDS {
            return Err(self.reject(ActionError::MaxHandsReached));
        }
        if !self.hands[index].can_split() {
            return Err(self.reject(ActionError::CannotSplit));
        }
        let bet = self.hands[index].bet();
        if self.balance < bet {
            return Err(self.reject(ActionError::InsufficientFunds));
        }
        let Some(&moved) = self.hands[index].cards().get(1) else {
            return Err(self.reject(ActionError::CannotSplit));
        };
        let Some((first_draw, second_draw)) = self.deck.draw_two() else {
            return Err(self.reject(ActionError::NoCards));
        };

        self.balance -= bet;
        let hand = &mut self.hands[index];
        hand.keep_first_card();
        hand.add_card(first_draw);

        let mut new_hand = Hand::from_split(moved, bet);
        new_hand.add_card(second_draw);
        self.hands.push(new_hand);

        tracing::debug!(hands = self.hands.len(), bet, "split");
        self.set_message(format!(
            "Split performed. Hand {} is updated. Finish this hand, then move on.",
            index + 1
        ));
        Ok(())
    }

    /// Returns whether [`Round::double_down`] would be accepted now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.active_hand()
            .is_some_and(|hand| self.balance >= hand.bet() && !self.deck.is_empty())
    }

    /// Returns whether [`Round::split`] would be accepted now.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.hands.len() < MAX_HANDS
            && self.deck.len() >= 2
            && self
                .active_hand()
                .is_some_and(|hand| hand.can_split() && self.balance >= hand.bet())
    }
}
