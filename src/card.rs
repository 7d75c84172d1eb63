//! Card types and the `"<rank>-<suit>"` token format.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// The single-letter token form (`C`, `D`, `H`, `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// The pip symbol used for pretty printing.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// The spelled-out suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, in the canonical per-suit deal order (ace first).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// The token form of the rank (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// The spelled-out rank name used in full-text card descriptions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            numeric => numeric.token(),
        }
    }
}

/// A playing card.
///
/// Cards are only constructible from the closed [`Rank`] and [`Suit`] sets;
/// text enters through the validating [`FromStr`] parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The full-text description, e.g. `"Ace of Spades"`.
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// The compact pretty form, e.g. `"A♠"`.
    #[must_use]
    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.token(), self.suit.symbol())
    }
}

/// Formats the card as its wire token, e.g. `"A-S"` or `"10-H"`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank.token(), self.suit.letter())
    }
}

/// Parses a card token of the form `"<rank>-<suit>"`.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Rank, Suit};
///
/// let card: Card = "10-H".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert!("11-H".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 3 && len != 4 {
            return Err(CardError::InvalidToken);
        }

        let Some((rank, suit)) = s.split_once('-') else {
            return Err(CardError::InvalidToken);
        };

        let rank = match rank {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(CardError::InvalidToken),
        };

        let suit = match suit {
            "C" => Suit::Clubs,
            "D" => Suit::Diamonds,
            "H" => Suit::Hearts,
            "S" => Suit::Spades,
            _ => return Err(CardError::InvalidToken),
        };

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per 52-card set.
pub const DECK_SIZE: usize = 52;
