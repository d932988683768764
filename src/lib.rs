//! A validated playing card model with optional `no_std` support.
//!
//! The crate provides a [`Card`] type that is valid at all times: the
//! rank is always in `1..=13` and the suit is always one of the four
//! [`Suit`]s. Construction is fallible, setters refuse invalid input and
//! leave the card untouched, and the [`deck`] module generates the 52
//! cards of a standard deck in a fixed order.
//!
//! # Example
//!
//! ```
//! use card52::{Card, Suit};
//!
//! let mut card = Card::new(10, Suit::Heart)?;
//! assert_eq!(card.to_string(), "[10 H]");
//!
//! assert!(!card.set_all(14, 'S'));
//! assert_eq!(card.rank(), 10);
//! # Ok::<(), card52::CardError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{ACE, Card, JACK, KING, MAX_RANK, MIN_RANK, QUEEN, Suit};
pub use deck::{DECK_SIZE, standard_deck};
pub use error::CardError;
