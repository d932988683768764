//! Prints a standard 52-card deck, one card per line.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use card52::cli::{DeckArgs, HEADER, init_logger};
use card52::{DECK_SIZE, standard_deck};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = DeckArgs::parse();
    init_logger(args.verbose);
    tracing::debug!("deck args: {:?}", args);

    if let Err(err) = print_deck(&args, io::stdout().lock()) {
        tracing::error!("failed to print deck: {err:#}");
        return Err(err);
    }

    tracing::info!("printed {} cards", DECK_SIZE);
    Ok(())
}

fn print_deck(args: &DeckArgs, out: impl Write) -> anyhow::Result<()> {
    let mut out = BufWriter::new(out);

    if args.header {
        writeln!(out, "{HEADER}").context("writing header")?;
    }

    for card in standard_deck() {
        let written = if args.glyphs {
            writeln!(out, "{card:#}")
        } else {
            writeln!(out, "{card}")
        };
        written.with_context(|| format!("writing card {card}"))?;
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}
