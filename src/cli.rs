//! Command-line configuration and logging for the `deck` binary.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Banner printed before the cards with `--header`.
pub const HEADER: &str = "Generated 52-card deck:";

/// Arguments of the `deck` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "deck")]
#[command(about = "Print every card of a standard 52-card deck, one per line")]
pub struct DeckArgs {
    /// Print a banner line before the cards
    #[arg(long)]
    pub header: bool,

    /// Render suits as Unicode glyphs instead of letters
    #[arg(long)]
    pub glyphs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the global logger.
///
/// Logs go to stderr so that stdout only carries cards. `RUST_LOG`
/// overrides the default filter.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "deck=debug,card52=debug,info"
    } else {
        "deck=info,card52=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
