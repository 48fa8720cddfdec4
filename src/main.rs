//! Command-line envido scorer.
//!
//! Reads `rank suit rank suit rank suit` from stdin and prints the score.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use envido::{Deck, Hand, ScoringOptions, TokenReader, read_hand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reject ranks 8 and 9, which the 40-card deck lacks.
    #[arg(long, conflicts_with = "deal")]
    spanish_deck: bool,
    /// Accept the same card more than once.
    #[arg(long, conflicts_with = "deal")]
    allow_duplicates: bool,
    /// Deal a hand from a deck shuffled with this seed instead of reading stdin.
    #[arg(long, value_name = "SEED")]
    deal: Option<u64>,
    /// Log the parsed hand and scoring pair.
    #[arg(short, long)]
    verbose: bool,
}

fn log_hand(hand: &Hand) {
    let [a, b, c] = hand.cards();
    log::debug!("hand: {a}, {b}, {c}");
    match hand.best_pair() {
        Some((high, low)) => log::debug!("scoring pair: {high} and {low}"),
        None => log::debug!("no shared suit, scoring highest card"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .format_module_path(false)
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let options = ScoringOptions::default()
        .with_spanish_deck(args.spanish_deck)
        .with_allow_duplicates(args.allow_duplicates);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let hand = if let Some(seed) = args.deal {
        let hand = Deck::shuffled(seed)
            .deal_hand()
            .context("failed to deal a hand")?;
        log::info!("dealt hand with seed {seed}");
        let [a, b, c] = hand.cards();
        writeln!(out, "{a} {b} {c}")?;
        hand
    } else {
        let stdin = io::stdin();
        let mut reader = TokenReader::new(stdin.lock());
        read_hand(&mut reader, options).context("failed to read hand from stdin")?
    };

    log_hand(&hand);
    writeln!(out, "{}", hand.envido())?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
