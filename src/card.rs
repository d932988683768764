//! Card and suit types.

use core::any::Any;
use core::fmt;

use crate::error::CardError;

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;
/// Lowest valid rank.
pub const MIN_RANK: u8 = ACE;
/// Highest valid rank.
pub const MAX_RANK: u8 = KING;

const RANK_LABELS: [&str; MAX_RANK as usize] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suit {
    /// Spades.
    #[default]
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Heart, Self::Diamond, Self::Club];

    /// Returns the single-letter symbol (`S`, `H`, `D` or `C`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Heart => 'H',
            Self::Diamond => 'D',
            Self::Club => 'C',
        }
    }

    /// Returns the Unicode suit glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Heart => '♥',
            Self::Diamond => '♦',
            Self::Club => '♣',
        }
    }

    /// Looks up a suit by its letter symbol or glyph.
    ///
    /// Letters are matched exactly, so `'s'` is not a suit.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'S' | '♠' => Some(Self::Spade),
            'H' | '♥' => Some(Self::Heart),
            'D' | '♦' => Some(Self::Diamond),
            'C' | '♣' => Some(Self::Club),
            _ => None,
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(CardError::InvalidSuit(symbol))
    }
}

impl fmt::Display for Suit {
    /// Writes the letter symbol, or the glyph with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = if f.alternate() {
            self.glyph()
        } else {
            self.symbol()
        };
        write!(f, "{symbol}")
    }
}

/// A playing card from a standard 52-card deck.
///
/// A `Card` can only hold a rank in `1..=13` (1 = Ace, 11 = Jack,
/// 12 = Queen, 13 = King) and one of the four suits. Every constructor
/// and setter checks its input, so there is no way to observe an invalid
/// card.
///
/// Suits can be passed either as [`Suit`] values or as their letter
/// symbols:
///
/// ```
/// use card52::{Card, CardError, Suit};
///
/// assert_eq!(Card::new(5, 'D'), Card::new(5, Suit::Diamond));
/// assert_eq!(Card::new(5, 'X'), Err(CardError::InvalidSuit('X')));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates the default card, the ace of spades.
    #[must_use]
    pub const fn new_default() -> Self {
        Self {
            rank: ACE,
            suit: Suit::Spade,
        }
    }

    /// Creates a card from a rank and a suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`, or
    /// [`CardError::InvalidSuit`] if `suit` does not name a suit. The rank
    /// is checked first.
    pub fn new<S>(rank: i32, suit: S) -> Result<Self, CardError>
    where
        S: TryInto<Suit>,
        S::Error: Into<CardError>,
    {
        let rank = Self::checked_rank(rank).ok_or(CardError::InvalidRank(rank))?;
        let suit = suit.try_into().map_err(Into::into)?;
        Ok(Self { rank, suit })
    }

    /// Copies an existing card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingSource`] if `source` is `None`.
    pub fn copy_of(source: Option<&Self>) -> Result<Self, CardError> {
        source.copied().ok_or(CardError::MissingSource)
    }

    /// Builds a card from parts already known to be valid.
    pub(crate) const fn from_parts(rank: u8, suit: Suit) -> Self {
        debug_assert!(matches!(rank, MIN_RANK..=MAX_RANK));
        Self { rank, suit }
    }

    /// Returns whether `rank` is in `1..=13`.
    #[must_use]
    pub const fn is_valid_rank(rank: i32) -> bool {
        matches!(rank, 1..=13)
    }

    const fn checked_rank(rank: i32) -> Option<u8> {
        if Self::is_valid_rank(rank) {
            Some(rank as u8)
        } else {
            None
        }
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Sets the rank. Returns `false` and leaves the card unchanged if
    /// `rank` is outside `1..=13`.
    pub const fn set_rank(&mut self, rank: i32) -> bool {
        match Self::checked_rank(rank) {
            Some(rank) => {
                self.rank = rank;
                true
            }
            None => false,
        }
    }

    /// Sets the suit. Returns `false` and leaves the card unchanged if
    /// `suit` does not name a suit.
    pub fn set_suit<S: TryInto<Suit>>(&mut self, suit: S) -> bool {
        let Ok(suit) = suit.try_into() else {
            return false;
        };
        self.suit = suit;
        true
    }

    /// Sets rank and suit together.
    ///
    /// Both values are checked before either is applied: if one of them
    /// is invalid the card is left unchanged and `false` is returned.
    pub fn set_all<S: TryInto<Suit>>(&mut self, rank: i32, suit: S) -> bool {
        let (Some(rank), Ok(suit)) = (Self::checked_rank(rank), suit.try_into()) else {
            return false;
        };
        self.rank = rank;
        self.suit = suit;
        true
    }

    /// Returns the printed face value: `A`, `2`..`10`, `J`, `Q` or `K`.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        RANK_LABELS[(self.rank - MIN_RANK) as usize]
    }

    /// Returns whether `other` is a `Card` with the same rank and suit.
    ///
    /// Values of any other type are never equal to a card. Between two
    /// `Card`s this agrees with `==`.
    #[must_use]
    pub fn equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|card| card == self)
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new_default()
    }
}

impl fmt::Display for Card {
    /// Writes `[<rank> <suit>]`, e.g. `[A S]` or `[10 H]`. The alternate
    /// form `{:#}` uses suit glyphs: `[A ♠]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "[{} {:#}]", self.rank_label(), self.suit)
        } else {
            write!(f, "[{} {}]", self.rank_label(), self.suit)
        }
    }
}
