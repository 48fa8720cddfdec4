//! Hand validation options.

use crate::card::Card;
use crate::error::CardError;

/// Configuration options for validating a hand before scoring.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use envido::ScoringOptions;
///
/// let options = ScoringOptions::default()
///     .with_spanish_deck(true)
///     .with_allow_duplicates(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoringOptions {
    /// Whether to reject ranks 8 and 9, which the 40-card deck lacks.
    pub spanish_deck: bool,
    /// Whether the same card may appear more than once in a hand.
    pub allow_duplicates: bool,
}

impl ScoringOptions {
    /// Sets whether only ranks of the 40-card deck are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use envido::ScoringOptions;
    ///
    /// let options = ScoringOptions::default().with_spanish_deck(true);
    /// assert!(options.spanish_deck);
    /// ```
    #[must_use]
    pub const fn with_spanish_deck(mut self, spanish_deck: bool) -> Self {
        self.spanish_deck = spanish_deck;
        self
    }

    /// Sets whether repeated cards are accepted.
    #[must_use]
    pub const fn with_allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = allow_duplicates;
        self
    }

    /// Checks a single card against these options.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for ranks outside `1..=12` and
    /// [`CardError::NotInDeck`] for 8 and 9 when `spanish_deck` is set.
    pub const fn check_card(&self, card: &Card) -> Result<(), CardError> {
        if let Err(err) = Card::new(card.suit, card.rank) {
            return Err(err);
        }
        if self.spanish_deck && matches!(card.rank, 8 | 9) {
            return Err(CardError::NotInDeck(card.rank));
        }
        Ok(())
    }
}
