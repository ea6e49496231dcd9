//! A shared table that runs the dealer's turn in real time.

use core::time::Duration;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, BetError, CommandError, DealError};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::round::{Command, DealerStep, GameState, Round, Snapshot};
use crate::sync::Shared;

/// A state change published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A command was handled (accepted or rejected).
    Changed(Snapshot),
    /// The dealer turned the hole card face up.
    HoleRevealed(Snapshot),
    /// The dealer drew a card.
    DealerDrew {
        /// The card drawn.
        card: Card,
        /// State after the draw.
        snapshot: Snapshot,
    },
    /// The dealer's turn settled the round.
    RoundOver {
        /// The settlement.
        result: RoundResult,
        /// State after settlement.
        snapshot: Snapshot,
    },
}

impl TableEvent {
    /// Returns the state carried by the event.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        match self {
            Self::Changed(snapshot)
            | Self::HoleRevealed(snapshot)
            | Self::DealerDrew { snapshot, .. }
            | Self::RoundOver { snapshot, .. } => snapshot,
        }
    }
}

/// A cloneable handle to one [`Round`] shared between a presentation layer
/// and the dealer worker.
///
/// Commands lock the round, apply, and publish a [`TableEvent::Changed`].
/// When a command ends the player's turn a worker thread plays the dealer,
/// pausing for [`TableOptions::dealer_delay`] after the reveal and after every
/// draw. The round stays in [`GameState::DealerTurn`] for the whole
/// sequence, so commands sent meanwhile are rejected.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use bjtable::{GameState, Table, TableOptions};
///
/// let table = Table::new(TableOptions::default().with_dealer_delay(Duration::ZERO), 7);
/// table.place_bet(25).unwrap();
/// table.deal().unwrap();
/// while table.snapshot().state == GameState::PlayerTurn {
///     table.stand().unwrap();
/// }
/// table.wait_for_dealer();
/// assert_eq!(table.snapshot().state, GameState::Idle);
/// ```
#[derive(Clone)]
pub struct Table {
    round: Shared<Round>,
    subscribers: Shared<Vec<Sender<TableEvent>>>,
    dealer: Shared<Option<JoinHandle<()>>>,
}

impl Table {
    /// Creates a table with a new session.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::from_round(Round::new(options, seed))
    }

    /// Wraps an existing session.
    ///
    /// A round already in [`GameState::DealerTurn`] has its dealer worker
    /// started right away.
    #[must_use]
    pub fn from_round(round: Round) -> Self {
        let table = Self {
            round: Shared::new(round),
            subscribers: Shared::new(Vec::new()),
            dealer: Shared::new(None),
        };

        {
            let round = table.round.lock();
            if round.state() == GameState::DealerTurn {
                table.start_dealer(round.options().dealer_delay);
            }
        }
        table
    }

    /// Returns a receiver for every event published from now on.
    pub fn subscribe(&self) -> Receiver<TableEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.round.lock().snapshot()
    }

    /// Returns whether a double down would be accepted now.
    pub fn can_double(&self) -> bool {
        self.round.lock().can_double()
    }

    /// Returns whether a split would be accepted now.
    pub fn can_split(&self) -> bool {
        self.round.lock().can_split()
    }

    /// Applies any command.
    ///
    /// # Errors
    ///
    /// See [`Round::apply`].
    pub fn apply(&self, command: Command) -> Result<(), CommandError> {
        self.run(|round| round.apply(command))
    }

    /// See [`Round::place_bet`].
    ///
    /// # Errors
    ///
    /// See [`Round::place_bet`].
    pub fn place_bet(&self, amount: usize) -> Result<(), BetError> {
        self.run(|round| round.place_bet(amount))
    }

    /// See [`Round::clear_bet`].
    ///
    /// # Errors
    ///
    /// See [`Round::clear_bet`].
    pub fn clear_bet(&self) -> Result<usize, BetError> {
        self.run(Round::clear_bet)
    }

    /// See [`Round::deal`].
    ///
    /// # Errors
    ///
    /// See [`Round::deal`].
    pub fn deal(&self) -> Result<(), DealError> {
        self.run(Round::deal)
    }

    /// See [`Round::deal_with_deck`].
    ///
    /// # Errors
    ///
    /// See [`Round::deal_with_deck`].
    pub fn deal_with_deck(&self, deck: Deck) -> Result<(), DealError> {
        self.run(|round| round.deal_with_deck(deck))
    }

    /// See [`Round::hit`].
    ///
    /// # Errors
    ///
    /// See [`Round::hit`].
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.run(Round::hit)
    }

    /// See [`Round::stand`].
    ///
    /// # Errors
    ///
    /// See [`Round::stand`].
    pub fn stand(&self) -> Result<(), ActionError> {
        self.run(Round::stand)
    }

    /// See [`Round::double_down`].
    ///
    /// # Errors
    ///
    /// See [`Round::double_down`].
    pub fn double_down(&self) -> Result<Card, ActionError> {
        self.run(Round::double_down)
    }

    /// See [`Round::split`].
    ///
    /// # Errors
    ///
    /// See [`Round::split`].
    pub fn split(&self) -> Result<(), ActionError> {
        self.run(Round::split)
    }

    /// Blocks until the current dealer sequence, if any, has settled.
    pub fn wait_for_dealer(&self) {
        let handle = self.dealer.lock().take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::error!("dealer worker panicked");
            }
        }
    }

    /// Returns whether the dealer worker is still running.
    pub fn is_dealer_running(&self) -> bool {
        self.dealer
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn run<T, E>(&self, command: impl FnOnce(&mut Round) -> Result<T, E>) -> Result<T, E> {
        let mut round = self.round.lock();
        let before = round.state();
        let outcome = command(&mut round);

        // Published under the round lock so it precedes every dealer event.
        self.publish(&TableEvent::Changed(round.snapshot()));
        if before != GameState::DealerTurn && round.state() == GameState::DealerTurn {
            // The worker blocks on the round lock until this guard drops, but
            // its handle is visible to `wait_for_dealer` from here on.
            self.start_dealer(round.options().dealer_delay);
        }
        outcome
    }

    fn publish(&self, event: &TableEvent) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Spawns the dealer worker. Callers hold the round lock.
    fn start_dealer(&self, delay: Duration) {
        let mut slot = self.dealer.lock();
        // A previous worker has settled and no longer touches the round.
        if let Some(previous) = slot.take() {
            if previous.join().is_err() {
                tracing::error!("dealer worker panicked");
            }
        }

        let table = self.clone();
        *slot = Some(thread::spawn(move || table.play_dealer(delay)));
    }

    fn play_dealer(&self, delay: Duration) {
        tracing::debug!(?delay, "dealer turn started");
        loop {
            let (step, snapshot) = {
                let mut round = self.round.lock();
                let step = round.dealer_step();
                (step, round.snapshot())
            };
            let Some(step) = step else {
                break;
            };

            let paced = step.is_paced();
            let event = match step {
                DealerStep::HoleRevealed => TableEvent::HoleRevealed(snapshot),
                DealerStep::Drew(card) => TableEvent::DealerDrew { card, snapshot },
                DealerStep::Settled(result) => TableEvent::RoundOver { result, snapshot },
            };
            self.publish(&event);

            if !paced {
                break;
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }
}
