use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::card::Card;
use crate::hand::BLACKJACK;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{GameState, Round};

/// The dealer draws below this total and stands at or above it.
pub const DEALER_STANDS_ON: u8 = 17;

/// One step of the dealer's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealerStep {
    /// The hole card was turned face up.
    HoleRevealed,
    /// The dealer drew a card.
    Drew(Card),
    /// Bets were settled and the round is back to [`GameState::Idle`].
    Settled(RoundResult),
}

impl DealerStep {
    /// Returns whether the caller should pause before the next step.
    #[must_use]
    pub const fn is_paced(&self) -> bool {
        !matches!(self, Self::Settled(_))
    }
}

impl Round {
    /// Performs the next step of the dealer's turn.
    ///
    /// The first step reveals the hole card. While any bet is live and the
    /// dealer total is under [`DEALER_STANDS_ON`], each further step draws
    /// one card. The final step settles every hand. An exhausted deck ends
    /// the drawing early and goes straight to settlement.
    ///
    /// Returns `None` outside [`GameState::DealerTurn`].
    pub fn dealer_step(&mut self) -> Option<DealerStep> {
        if self.state != GameState::DealerTurn {
            return None;
        }

        if self.dealer_hand.reveal_hole() {
            self.set_message("Dealer reveals the hidden card...");
            return Some(DealerStep::HoleRevealed);
        }

        if self.has_live_bets() && self.dealer_hand.value() < DEALER_STANDS_ON {
            if let Some(card) = self.deck.draw() {
                self.dealer_hand.add_card(card);
                self.set_message(format!(
                    "Dealer draws {card}. Dealer total is now {}.",
                    self.dealer_hand.value()
                ));
                return Some(DealerStep::Drew(card));
            }
            tracing::warn!(
                dealer_value = self.dealer_hand.value(),
                "deck exhausted, dealer stops drawing"
            );
        }

        let result = self.settlement();
        self.finish_round(result.clone());
        Some(DealerStep::Settled(result))
    }

    /// Runs the dealer's turn to completion without pausing.
    ///
    /// Returns the settlement, or `None` outside [`GameState::DealerTurn`].
    pub fn play_dealer(&mut self) -> Option<RoundResult> {
        while let Some(step) = self.dealer_step() {
            if let DealerStep::Settled(result) = step {
                return Some(result);
            }
        }
        None
    }

    /// Pays every live bet against the dealer's total and zeroes all bets.
    ///
    /// Hands whose bet is already zero were lost earlier and are reported
    /// without payout.
    pub(super) fn settlement(&mut self) -> RoundResult {
        let dealer_value = self.dealer_hand.value();
        let dealer_bust = dealer_value > BLACKJACK;

        let mut payouts = Vec::with_capacity(self.hands.len());
        let mut message = String::new();

        for (index, hand) in self.hands.iter_mut().enumerate() {
            let n = index + 1;
            let player_value = hand.value();
            let bet = hand.take_bet();

            let (outcome, payout) = if bet == 0 {
                let _ = writeln!(message, "Hand {n} had no live bet (busted).");
                if hand.is_bust() {
                    (HandOutcome::Bust, 0)
                } else {
                    (HandOutcome::Lose, 0)
                }
            } else if dealer_bust {
                let _ = writeln!(message, "Hand {n} wins! Dealer busted with {dealer_value}.");
                (HandOutcome::Win, bet * 2)
            } else if player_value > dealer_value {
                let _ = writeln!(
                    message,
                    "Hand {n} beats dealer {player_value} vs {dealer_value}."
                );
                (HandOutcome::Win, bet * 2)
            } else if player_value == dealer_value {
                let _ = writeln!(message, "Hand {n} pushes with dealer at {dealer_value}.");
                (HandOutcome::Push, bet)
            } else {
                let _ = writeln!(
                    message,
                    "Hand {n} loses to dealer {dealer_value} vs {player_value}."
                );
                (HandOutcome::Lose, 0)
            };
            payouts.push((outcome, payout));
        }

        let credited: usize = payouts.iter().map(|(_, payout)| payout).sum();
        self.balance += credited;

        self.set_message(if message.is_empty() {
            String::from("Round over.")
        } else {
            String::from(message.trim_end())
        });

        let hands: Vec<HandResult> = payouts
            .into_iter()
            .enumerate()
            .map(|(index, (outcome, payout))| self.hand_result(index, outcome, payout))
            .collect();
        self.round_result(hands)
    }
}
