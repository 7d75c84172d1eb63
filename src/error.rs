//! Error types for card, deck, and roster operations.

use thiserror::Error;

/// Errors produced when parsing card tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token does not match the `"<rank>-<suit>"` format.
    #[error("invalid card token")]
    InvalidToken,
}

/// Errors produced by deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A draw was requested beyond the cards available.
    #[error("cannot draw {requested} cards from a deck holding {available}")]
    EmptyDeck {
        /// How many cards the draw asked for.
        requested: usize,
        /// How many cards the deck held.
        available: usize,
    },
}

/// Errors produced when seating a player at the table.
///
/// All of these are recoverable setup-time failures; callers are expected
/// to re-prompt for another name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The name is already taken, compared case-insensitively.
    #[error("player name is already taken")]
    DuplicateName,
    /// The name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// The name is longer than [`MAX_NAME_LEN`](crate::player::MAX_NAME_LEN) characters.
    #[error("player name is too long")]
    NameTooLong,
}
