//! A single 52-card deck, built fresh for every round.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered deck consumed from the top.
///
/// The top of the deck is the end of the backing vector, so drawing is a
/// `pop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck: one card per (suit, rank), suits in
    /// [`Suit::ALL`] order and ranks Ace through King.
    ///
    /// ```
    /// use bjtable::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// Useful for replaying a known round.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place with a uniform random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Removes and returns the top card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws two cards, or none at all if fewer than two remain.
    pub fn draw_two(&mut self) -> Option<(Card, Card)> {
        if self.cards.len() < 2 {
            return None;
        }
        let first = self.cards.pop()?;
        let second = self.cards.pop()?;
        Some((first, second))
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
