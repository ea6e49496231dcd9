//! Round result types.

use alloc::vec::Vec;

/// How a single hand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses to a higher dealer total or a dealer natural.
    Lose,
    /// Push (tie); the stake is returned.
    Push,
    /// Player has a natural and is paid 3:2.
    Blackjack,
    /// Player went over 21.
    Bust,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Chips staked on the hand, doubles included.
    pub bet: usize,
    /// Chips credited back to the balance, stake included.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, in hand order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Total chips credited back to the balance.
    #[must_use]
    pub fn total_payout(&self) -> usize {
        self.hands.iter().map(|h| h.payout).sum()
    }

    /// Total chips staked across all hands.
    #[must_use]
    pub fn total_bet(&self) -> usize {
        self.hands.iter().map(|h| h.bet).sum()
    }

    /// Net result (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip totals fit in isize")]
    pub fn net(&self) -> isize {
        self.total_payout() as isize - self.total_bet() as isize
    }
}
