//! Envido scoring.
//!
//! A hand scores [`SAME_SUIT_BONUS`] plus the two highest card values among
//! cards of a shared suit. With no shared suit it scores the highest single
//! card value. Ranks 1 to 7 are worth their rank, everything else is worth 0.

use crate::card::{Card, MAX_NUMBER_RANK, MIN_RANK};

/// Bonus for holding two cards of the same suit.
pub const SAME_SUIT_BONUS: u8 = 20;

/// Highest possible envido score (two sevens of one suit).
pub const MAX_ENVIDO: u8 = SAME_SUIT_BONUS + 2 * MAX_NUMBER_RANK;

/// Returns the envido value of a rank.
#[must_use]
pub const fn rank_value(rank: u8) -> u8 {
    if rank >= MIN_RANK && rank <= MAX_NUMBER_RANK {
        rank
    } else {
        0
    }
}

/// Returns the same-suit pair that earns the bonus, higher-valued card first.
///
/// When all three cards share a suit the lowest-valued one is left out.
#[must_use]
pub fn best_pair(cards: [Card; 3]) -> Option<(Card, Card)> {
    let mut best: Option<(Card, Card)> = None;

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let (a, b) = (cards[i], cards[j]);
            if a.suit != b.suit {
                continue;
            }
            let pair = if a.envido_value() >= b.envido_value() {
                (a, b)
            } else {
                (b, a)
            };
            if best.is_none_or(|current| pair_total(pair) > pair_total(current)) {
                best = Some(pair);
            }
        }
    }

    best
}

const fn pair_total((a, b): (Card, Card)) -> u8 {
    SAME_SUIT_BONUS + a.envido_value() + b.envido_value()
}

/// Computes the envido score of three cards.
///
/// The result does not depend on card order and is always in
/// `0..=MAX_ENVIDO`.
///
/// # Example
///
/// ```
/// use envido::{Card, Suit, envido};
///
/// let score = envido(
///     Card::new_unchecked(Suit::Oros, 4),
///     Card::new_unchecked(Suit::Oros, 7),
///     Card::new_unchecked(Suit::Copas, 1),
/// );
/// assert_eq!(score, 31);
/// ```
#[must_use]
pub fn envido(c1: Card, c2: Card, c3: Card) -> u8 {
    let cards = [c1, c2, c3];
    best_pair(cards).map_or_else(
        || {
            cards
                .iter()
                .map(Card::envido_value)
                .max()
                .unwrap_or_default()
        },
        pair_total,
    )
}
