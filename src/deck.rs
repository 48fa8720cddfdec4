//! The 40-card Spanish deck.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, MAX_RANK, MIN_RANK, Suit};
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};

/// Number of cards in the Spanish deck.
pub const DECK_SIZE: usize = 40;

/// Returns whether a rank belongs to the 40-card deck.
#[must_use]
pub const fn in_deck(rank: u8) -> bool {
    rank >= MIN_RANK && rank <= MAX_RANK && rank != 8 && rank != 9
}

/// A shuffled Spanish deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left to deal, top of the deck last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with the given seed.
    ///
    /// The same seed always yields the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use envido::Deck;
    ///
    /// let mut deck = Deck::shuffled(42);
    /// let hand = deck.deal_hand().unwrap();
    /// assert!(hand.envido() <= 33);
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Self::ordered_cards();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Returns every card of the deck in suit then rank order.
    #[must_use]
    pub fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in (MIN_RANK..=MAX_RANK).filter(|&rank| in_deck(rank)) {
                cards.push(Card::new_unchecked(suit, rank));
            }
        }

        cards
    }

    /// Draws a card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a three-card hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than three cards remain.
    /// The deck is left untouched in that case.
    pub fn deal_hand(&mut self) -> Result<Hand, DealError> {
        if self.cards.len() < HAND_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        let mut cards = [Card::new_unchecked(Suit::Oros, MIN_RANK); HAND_SIZE];
        for slot in &mut cards {
            *slot = self.draw().ok_or(DealError::NotEnoughCards)?;
        }

        Ok(Hand::new(cards)?)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
