//! A multiplayer table blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the master deck and the
//! roster (one dealer plus up to four human players) and drives the full
//! round flow — dealing, the interactive turn loop, dealer auto-play, and
//! resolution — through a pair of ports: a [`Prompter`] for input and a
//! [`Renderer`] for display. The core performs no I/O of its own.
//!
//! # Example
//!
//! ```
//! use twentyone::{resolve, smart_value, Card, RoundOutcome};
//!
//! let hand: Vec<Card> = ["A-S", "K-H"].iter().map(|t| t.parse().unwrap()).collect();
//! assert_eq!(smart_value(&hand), 21);
//!
//! let outcome = resolve(&[("Dealer", 19), ("Alice", 21)]);
//! assert_eq!(outcome, RoundOutcome::Win { name: "Alice".into(), value: 21 });
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, JoinError};
pub use game::{Action, DEALER_STAND, Game, RoundSignal};
pub use hand::{
    BLACKJACK, card_value, hard_value, smart_value, soft_value, token_value, value_label,
};
pub use io::{MASK, Prompter, Renderer, SeatView};
pub use player::{MAX_NAME_LEN, Player, Role, Roster};
pub use result::{RoundOutcome, resolve};
