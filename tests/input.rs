//! Token reader and hand parsing tests.

use std::io::Cursor;

use envido::{CardError, HandError, InputError, ScoringOptions, TokenReader, read_hand};

fn reader(text: &str) -> TokenReader<Cursor<&str>> {
    TokenReader::new(Cursor::new(text))
}

fn tokens(text: &str) -> Vec<String> {
    let mut reader = reader(text);
    let mut out = Vec::new();
    while let Some(token) = reader.next_token().unwrap() {
        out.push(token.to_string());
    }
    out
}

#[test]
fn tokens_span_lines_and_skip_blank_ones() {
    assert_eq!(
        tokens("4  oros\n\n\n7 oros   \n  1\ncopas"),
        ["4", "oros", "7", "oros", "1", "copas"]
    );
    assert_eq!(tokens("a\r\nb\r\n"), ["a", "b"]);
    assert!(tokens("").is_empty());
    assert!(tokens("   \n \n").is_empty());
}

#[test]
fn reads_hand_across_lines() {
    let mut reader = reader("5 o\n3 c 9\ne\n");
    let hand = read_hand(&mut reader, ScoringOptions::default()).unwrap();
    assert_eq!(hand.envido(), 5);
    assert!(reader.next_token().unwrap().is_none());
}

#[test]
fn reads_only_six_tokens() {
    let mut reader = reader("10 oros 11 copas 12 espadas extra");
    let hand = read_hand(&mut reader, ScoringOptions::default()).unwrap();
    assert_eq!(hand.envido(), 0);
    assert_eq!(reader.next_token().unwrap(), Some("extra"));
}

#[test]
fn missing_tokens_fail() {
    let err = read_hand(&mut reader("4 oros 7 oros 1"), ScoringOptions::default()).unwrap_err();
    assert!(matches!(err, InputError::UnexpectedEof("suit")));

    let err = read_hand(&mut reader("4 oros"), ScoringOptions::default()).unwrap_err();
    assert!(matches!(err, InputError::UnexpectedEof("rank")));
}

#[test]
fn non_numeric_rank_fails() {
    let err = read_hand(&mut reader("x oros 7 oros 1 copas"), ScoringOptions::default())
        .unwrap_err();
    assert!(matches!(err, InputError::InvalidRank { ref token } if token == "x"));

    let err = read_hand(&mut reader("4 oros -7 oros 1 copas"), ScoringOptions::default())
        .unwrap_err();
    assert!(matches!(err, InputError::InvalidRank { ref token } if token == "-7"));
    assert_eq!(err.to_string(), "invalid rank \"-7\"");
}

#[test]
fn unknown_suit_fails() {
    let err = read_hand(&mut reader("4 hearts 7 oros 1 copas"), ScoringOptions::default())
        .unwrap_err();
    assert!(matches!(err, InputError::InvalidSuit { ref token } if token == "hearts"));
}

#[test]
fn invalid_hands_are_reported() {
    let err = read_hand(&mut reader("13 oros 7 oros 1 copas"), ScoringOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        InputError::Hand(HandError::Card(CardError::InvalidRank(13)))
    ));

    let err = read_hand(&mut reader("7 b 7 b 1 c"), ScoringOptions::default()).unwrap_err();
    assert!(matches!(err, InputError::Hand(HandError::DuplicateCard(_))));

    let options = ScoringOptions::default().with_spanish_deck(true);
    let err = read_hand(&mut reader("9 b 7 b 1 c"), options).unwrap_err();
    assert_eq!(err.to_string(), "rank 9 is not in the Spanish deck");
}
