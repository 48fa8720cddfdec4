//! Three-card hand representation.

use crate::card::Card;
use crate::error::HandError;
use crate::options::ScoringOptions;
use crate::scoring;

/// Number of cards in a Truco hand.
pub const HAND_SIZE: usize = 3;

/// A validated hand of three cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in the order they were given.
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand with the default [`ScoringOptions`].
    ///
    /// # Errors
    ///
    /// Returns an error if a rank is out of range or a card is repeated.
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        Self::with_options(cards, ScoringOptions::default())
    }

    /// Creates a hand, validating each card against `options`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Card`] for a card the options reject and
    /// [`HandError::DuplicateCard`] for a repeated card unless duplicates
    /// are allowed.
    pub fn with_options(
        cards: [Card; HAND_SIZE],
        options: ScoringOptions,
    ) -> Result<Self, HandError> {
        for card in &cards {
            options.check_card(card)?;
        }

        if !options.allow_duplicates {
            for (i, card) in cards.iter().enumerate() {
                if cards[..i].contains(card) {
                    return Err(HandError::DuplicateCard(*card));
                }
            }
        }

        Ok(Self { cards })
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Calculates the envido score of the hand.
    #[must_use]
    pub fn envido(&self) -> u8 {
        let [c1, c2, c3] = self.cards;
        scoring::envido(c1, c2, c3)
    }

    /// Returns the same-suit pair that earns the bonus, if any.
    #[must_use]
    pub fn best_pair(&self) -> Option<(Card, Card)> {
        scoring::best_pair(self.cards)
    }

    /// Returns whether all three cards share a suit.
    #[must_use]
    pub fn is_single_suit(&self) -> bool {
        let [a, b, c] = self.cards;
        a.suit == b.suit && b.suit == c.suit
    }
}
