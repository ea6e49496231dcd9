//! Error types for round commands.
//!
//! Every error is recoverable: a command that fails leaves the round exactly
//! as it was and records the error text as the round's status message.

use thiserror::Error;

/// Errors that can occur while staging a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets can only be staged between rounds.
    #[error("cannot change the bet while a round is in progress")]
    InvalidState,
    /// Insufficient funds.
    #[error("not enough balance to place that bet")]
    InsufficientFunds,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("round in progress, cannot deal again")]
    InvalidState,
    /// No bet has been staged.
    #[error("no bet placed, cannot deal")]
    NoBet,
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("not your turn")]
    InvalidState,
    /// Insufficient funds for this action.
    #[error("not enough balance for this action")]
    InsufficientFunds,
    /// The active hand is not a two-card pair of matching rank or value.
    #[error("cards are not splittable (must be same rank or both 10-value)")]
    CannotSplit,
    /// The hand limit has been reached.
    #[error("maximum splits reached ({} total hands)", crate::round::MAX_HANDS)]
    MaxHandsReached,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Any command failure, as returned by [`Round::apply`](crate::round::Round::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A betting command failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
}
