//! Table configuration.

use core::time::Duration;

/// Configuration for a table session.
///
/// House rules are fixed; these options only cover the session's stake and
/// the pacing of the dealer's turn.
///
/// ```
/// use core::time::Duration;
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_balance(500)
///     .with_dealer_delay(Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips the player starts the session with.
    pub starting_balance: usize,
    /// Pause after the hole card is revealed and after every dealer draw.
    pub dealer_delay: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            dealer_delay: Duration::from_secs(1),
        }
    }
}

impl TableOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the dealer pacing delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_delay(Duration::from_millis(250));
    /// assert_eq!(options.dealer_delay, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }
}
