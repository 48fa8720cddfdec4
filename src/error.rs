//! Error types for card, hand and input handling.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=12`.
    #[error("rank {0} is outside 1..=12")]
    InvalidRank(u8),
    /// Rank not present in the 40-card Spanish deck.
    #[error("rank {0} is not in the Spanish deck")]
    NotInDeck(u8),
    /// Unknown suit name.
    #[error("unknown suit")]
    InvalidSuit,
}

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The same card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// A card is not valid under the scoring options.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The dealt cards do not form a valid hand.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur while reading a hand from text input.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum InputError {
    /// The input ended before all tokens were read.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
    /// A rank token is not a number.
    #[error("invalid rank {token:?}")]
    InvalidRank {
        /// The offending token.
        token: alloc::string::String,
    },
    /// A suit token does not name a suit.
    #[error("invalid suit {token:?}")]
    InvalidSuit {
        /// The offending token.
        token: alloc::string::String,
    },
    /// The cards do not form a valid hand.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// Reading from the underlying stream failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
