//! Standard deck generation.

use crate::card::{Card, MAX_RANK, MIN_RANK, Suit};

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = MAX_RANK as usize;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANKS_PER_SUIT;

/// Iterates over the cards of a standard deck.
///
/// Cards come suit by suit (spades, hearts, diamonds, clubs), and from
/// ace to king within each suit.
pub fn cards() -> impl Iterator<Item = Card> {
    Suit::ALL.into_iter().flat_map(|suit| {
        (MIN_RANK..=MAX_RANK).map(move |rank| Card::from_parts(rank, suit))
    })
}

/// Creates a standard 52-card deck, in the order of [`cards`].
///
/// ```
/// use card52::{Card, DECK_SIZE, Suit, standard_deck};
///
/// let deck = standard_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0], Card::default());
/// assert_eq!(deck[DECK_SIZE - 1], Card::new(13, Suit::Club)?);
/// # Ok::<(), card52::CardError>(())
/// ```
#[must_use]
pub fn standard_deck() -> [Card; DECK_SIZE] {
    let mut deck = [Card::new_default(); DECK_SIZE];
    for (slot, card) in deck.iter_mut().zip(cards()) {
        *slot = card;
    }
    deck
}
