//! Reading hands from whitespace-separated text.
//!
//! The expected input is six tokens, `rank1 suit1 rank2 suit2 rank3 suit3`,
//! spread over any number of lines.

use alloc::string::{String, ToString};
use std::io::BufRead;

use crate::card::{Card, Suit};
use crate::error::InputError;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::ScoringOptions;

/// A token reader over a line-oriented stream.
///
/// Tokens are separated by ASCII whitespace and may span line breaks.
/// Blank lines are skipped.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Creates a reader with an empty buffer.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the stream fails.
    pub fn next_token(&mut self) -> Result<Option<&str>, InputError> {
        loop {
            let rest = &self.line[self.pos..];
            let skipped = rest.len() - rest.trim_start_matches(is_separator).len();
            self.pos += skipped;

            if self.pos < self.line.len() {
                break;
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }

        let start = self.pos;
        let len = self.line[start..]
            .find(is_separator)
            .unwrap_or(self.line.len() - start);
        self.pos = start + len;
        Ok(Some(&self.line[start..self.pos]))
    }

    fn expect_token(&mut self, what: &'static str) -> Result<String, InputError> {
        self.next_token()?
            .map(ToString::to_string)
            .ok_or(InputError::UnexpectedEof(what))
    }

    /// Reads a `rank suit` pair.
    ///
    /// The rank is range-checked when the hand is built, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if the input ends early, the rank is not a number or
    /// the suit is unknown.
    pub fn read_card(&mut self) -> Result<Card, InputError> {
        let token = self.expect_token("rank")?;
        let rank = token
            .parse::<u8>()
            .map_err(|_| InputError::InvalidRank { token })?;

        let token = self.expect_token("suit")?;
        let suit = token
            .parse::<Suit>()
            .map_err(|_| InputError::InvalidSuit { token })?;

        Ok(Card::new_unchecked(suit, rank))
    }
}

const fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Reads three cards and builds a validated hand.
///
/// # Errors
///
/// Returns an error on malformed input or if the cards do not form a valid
/// hand under `options`.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use envido::{ScoringOptions, TokenReader, read_hand};
///
/// let mut reader = TokenReader::new(Cursor::new("4 oros 7 oros\n1 copas\n"));
/// let hand = read_hand(&mut reader, ScoringOptions::default()).unwrap();
/// assert_eq!(hand.envido(), 31);
/// ```
pub fn read_hand<R: BufRead>(
    reader: &mut TokenReader<R>,
    options: ScoringOptions,
) -> Result<Hand, InputError> {
    let mut cards = [Card::new_unchecked(Suit::Oros, 1); HAND_SIZE];
    for slot in &mut cards {
        *slot = reader.read_card()?;
    }
    Ok(Hand::with_options(cards, options)?)
}
