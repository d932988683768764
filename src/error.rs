//! Error types for card construction.

use core::convert::Infallible;

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}: must be between 1 and 13")]
    InvalidRank(i32),
    /// Character that does not name a suit.
    #[error("invalid suit '{0}': must be one of S, H, D, C")]
    InvalidSuit(char),
    /// No card to copy from.
    #[error("no source card to copy from")]
    MissingSource,
}

impl From<Infallible> for CardError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
