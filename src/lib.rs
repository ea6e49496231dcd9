//! A single-table blackjack round engine with optional `no_std` support.
//!
//! [`Round`] owns one player's session against the dealer: staging bets,
//! dealing, hit/stand/double/split across up to [`MAX_HANDS`] hands, the
//! dealer's draw-to-17, and settlement. With the `std` feature, [`Table`]
//! wraps a round for a presentation layer and plays the dealer's turn on a
//! worker thread with a pause between steps.
//!
//! # Example
//!
//! ```
//! use bjtable::{GameState, Round, TableOptions};
//!
//! let mut round = Round::new(TableOptions::default(), 42);
//! round.place_bet(100).unwrap();
//! round.deal().unwrap();
//! while round.state() == GameState::PlayerTurn {
//!     round.stand().unwrap();
//! }
//! round.play_dealer();
//! assert_eq!(round.state(), GameState::Idle);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
#[cfg(feature = "std")]
mod sync;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, CommandError, DealError};
pub use hand::{BLACKJACK, DealerHand, Hand, HandStatus, hand_value, is_soft};
pub use options::TableOptions;
pub use result::{HandOutcome, HandResult, RoundResult};
pub use round::{
    CHIP_VALUES, Command, DEALER_STANDS_ON, DealerStep, GameState, MAX_HANDS, Round, Snapshot,
};
#[cfg(feature = "std")]
pub use table::{Table, TableEvent};
