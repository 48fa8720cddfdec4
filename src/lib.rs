//! Envido scoring for Truco hands with optional `no_std` support.
//!
//! The crate provides [`envido`], which scores three cards, and a validated
//! [`Hand`] type built on top of it. A seeded [`Deck`] deals random hands and,
//! with the `std` feature, [`read_hand`] parses a hand from text.
//!
//! # Example
//!
//! ```
//! use envido::{Card, Hand, Suit};
//!
//! let hand = Hand::new([
//!     Card::new(Suit::Oros, 4).unwrap(),
//!     Card::new(Suit::Oros, 7).unwrap(),
//!     Card::new(Suit::Copas, 1).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(hand.envido(), 31);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod input;
pub mod options;
pub mod scoring;

// Re-export main types
pub use card::{Card, MAX_RANK, MIN_RANK, Suit};
pub use deck::{DECK_SIZE, Deck};
#[cfg(feature = "std")]
pub use error::InputError;
pub use error::{CardError, DealError, HandError};
pub use hand::{HAND_SIZE, Hand};
#[cfg(feature = "std")]
pub use input::{TokenReader, read_hand};
pub use options::ScoringOptions;
pub use scoring::{MAX_ENVIDO, SAME_SUIT_BONUS, best_pair, envido, rank_value};
