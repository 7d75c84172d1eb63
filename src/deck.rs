//! The deck: an ordered, mutable sequence of cards.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Add;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{CardError, DeckError};

/// An ordered, mutable sequence of [`Card`]s.
///
/// A deck may hold any number of 52-card sets (duplicates are expected and
/// not deduplicated) and acts as a stack: cards are drawn from the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck of `sets` concatenated 52-card sets in canonical
    /// order (suits clubs through spades, ranks ace through king).
    ///
    /// `sets = 0` yields an empty deck, useful as a merge accumulator.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Deck;
    ///
    /// assert_eq!(Deck::with_sets(2).len(), 104);
    /// assert!(Deck::with_sets(0).is_empty());
    /// ```
    #[must_use]
    pub fn with_sets(sets: usize) -> Self {
        let mut cards = Vec::with_capacity(sets * DECK_SIZE);

        for _ in 0..sets {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Shuffles the deck in place with the Fisher–Yates algorithm.
    ///
    /// The random source is injected so callers can seed it for
    /// reproducible shuffles.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Performs one deterministic riffle: cuts the deck in half and
    /// interleaves the halves.
    pub fn riffle(&mut self) {
        let cut = self.cards.len() / 2;
        let back = self.cards.split_off(cut);
        for (i, card) in back.into_iter().enumerate() {
            let at = (i * 2 + 1).min(self.cards.len());
            self.cards.insert(at, card);
        }
    }

    /// Removes and returns the last `count` cards, most recently placed
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if `count` exceeds the deck size;
    /// the deck is left untouched in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::EmptyDeck {
                requested: count,
                available: self.cards.len(),
            });
        }

        let mut drawn = self.cards.split_off(self.cards.len() - count);
        drawn.reverse();
        Ok(drawn)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck {
            requested: 1,
            available: 0,
        })
    }

    /// Adds a card to the top of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Moves every card out of `other` onto the end of this deck,
    /// preserving their order and leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Parses and adds a sequence of card tokens.
    ///
    /// Every token is validated before any card is added, so a failure
    /// leaves the deck untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidToken`] if any token is malformed.
    pub fn merge_tokens<'a, I>(&mut self, tokens: I) -> Result<(), CardError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let parsed = tokens
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Card>, CardError>>()?;
        self.cards.extend(parsed);
        Ok(())
    }

    /// Empties the deck without transferring its cards anywhere.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck contains the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterates over the cards in deck order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

/// Concatenates two decks, preserving the relative order of each.
impl Add for Deck {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.cards.extend(other.cards);
        self
    }
}

/// Appends a single card.
impl Add<Card> for Deck {
    type Output = Self;

    fn add(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Pretty-prints the deck as space-separated cards, e.g. `"A♠ 10♥"`.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{}", card.pretty())?;
            sep = " ";
        }
        Ok(())
    }
}
