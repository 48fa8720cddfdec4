//! Card types for the Spanish deck.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Oros (coins).
    Oros,
    /// Copas (cups).
    Copas,
    /// Espadas (swords).
    Espadas,
    /// Bastos (clubs).
    Bastos,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Oros, Self::Copas, Self::Espadas, Self::Bastos];

    /// Returns the lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oros => "oros",
            Self::Copas => "copas",
            Self::Espadas => "espadas",
            Self::Bastos => "bastos",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a suit from its full name or its initial, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| {
                let name = suit.name();
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(&name[..1])
            })
            .ok_or(CardError::InvalidSuit)
    }
}

/// Lowest valid rank.
pub const MIN_RANK: u8 = 1;

/// Highest valid rank.
pub const MAX_RANK: u8 = 12;

/// Highest rank that still counts as a number card for envido.
pub const MAX_NUMBER_RANK: u8 = 7;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = As, 10 = Sota, 11 = Caballo, 12 = Rey).
    pub rank: u8,
}

impl Card {
    /// Creates a new card, rejecting ranks outside `1..=12`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Creates a new card without validating the rank.
    ///
    /// Out-of-range ranks are scored as face cards (value 0).
    #[must_use]
    pub const fn new_unchecked(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card scores nothing on its own.
    #[must_use]
    pub const fn is_face(&self) -> bool {
        crate::scoring::rank_value(self.rank) == 0
    }

    /// Returns the envido value of the card.
    #[must_use]
    pub const fn envido_value(&self) -> u8 {
        crate::scoring::rank_value(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.suit)
    }
}
