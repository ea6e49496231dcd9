//! Hand evaluation and the player and dealer hand records.

use alloc::vec::Vec;

use crate::card::Card;

/// Totals above this value are bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Returns the best blackjack total of `cards`.
///
/// Every Ace starts at 11 and is demoted to 1, one at a time, while the
/// total is over 21. An empty slice is worth 0.
///
/// ```
/// use bjtable::{Card, Suit, hand_value};
///
/// let aces_and_nine = [
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Clubs, 9),
/// ];
/// assert_eq!(hand_value(&aces_and_nine), 21);
/// assert_eq!(hand_value(&[]), 0);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the total of `cards` still counts an Ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether `cards` is a two-card 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == BLACKJACK
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is waiting for, or taking, actions.
    Active,
    /// Player has stood.
    Stood,
    /// Player doubled down; the hand is closed.
    Doubled,
    /// Hand has busted (over 21).
    Bust,
}

/// One betting slot: the player's cards together with the bet riding on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    /// Live bet; zeroed once the hand is lost or settled.
    bet: usize,
    /// Chips committed to this hand over the round, kept for reporting.
    staked: usize,
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            staked: bet,
            from_split: false,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            staked: bet,
            from_split: true,
        }
    }

    /// Adds a card to the hand, marking it bust when the total passes 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if self.value() > BLACKJACK {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the live bet on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns every chip committed to this hand this round, including a
    /// double, even after the bet has been lost.
    #[must_use]
    pub const fn staked(&self) -> usize {
        self.staked
    }

    pub(crate) const fn double_bet(&mut self) {
        self.staked += self.bet;
        self.bet *= 2;
    }

    /// Zeroes the live bet, returning what was riding.
    pub(crate) const fn take_bet(&mut self) -> usize {
        let bet = self.bet;
        self.bet = 0;
        bet
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is a splittable pair.
    ///
    /// Ranks must match, except that any two ten-valued cards also pair.
    #[must_use]
    pub fn can_split(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => first.pairs_with(second),
            _ => false,
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drops the second card of a split pair and marks the hand as split.
    pub(crate) fn keep_first_card(&mut self) {
        self.cards.truncate(1);
        self.from_split = true;
    }
}

/// The dealer's hand.
///
/// The second card dealt is the hole card and stays hidden until
/// [`DealerHand::reveal_hole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including a hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the card at `index` is face down.
    #[must_use]
    pub const fn is_hidden(&self, index: usize) -> bool {
        index == 1 && !self.hole_revealed
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card. Returns `false` if it was already face up.
    pub const fn reveal_hole(&mut self) -> bool {
        let was_hidden = !self.hole_revealed;
        self.hole_revealed = true;
        was_hidden
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, Card::value)
        }
    }

    /// Calculates the full value of the hand, hole card included.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
