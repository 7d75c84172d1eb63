//! Hand valuation: the hard, soft, and bust-avoiding totals.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use crate::card::{Card, Rank};
use crate::error::CardError;

/// The winning hand value.
pub const BLACKJACK: u32 = 21;

/// Returns the stand-alone value of a single card.
///
/// Aces count as 11 here; whether an ace ends up as 1 or 11 depends on the
/// rest of the hand, which [`smart_value`] decides.
#[must_use]
pub const fn card_value(card: Card) -> u32 {
    match card.rank {
        Rank::Ace => 11,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// Returns the value of a single card given as a wire token.
///
/// # Errors
///
/// Returns [`CardError::InvalidToken`] for a malformed token.
pub fn token_value(token: &str) -> Result<u32, CardError> {
    token.parse::<Card>().map(card_value)
}

/// The hand total with every ace counted as 11. May exceed 21.
#[must_use]
pub fn hard_value(cards: &[Card]) -> u32 {
    cards.iter().map(|card| card_value(*card)).sum()
}

/// The hand total with every ace counted as 1.
#[must_use]
pub fn soft_value(cards: &[Card]) -> u32 {
    cards
        .iter()
        .map(|card| if card.rank == Rank::Ace { 1 } else { card_value(*card) })
        .sum()
}

/// The bust-avoiding total used for all gameplay decisions.
///
/// Starts from the hard total and downgrades one ace at a time from 11 to
/// 1, only as long as the total exceeds 21 and an upgradeable ace remains.
///
/// # Example
///
/// ```
/// use twentyone::{Card, smart_value};
///
/// let hand: Vec<Card> = ["A-S", "A-H", "9-C"]
///     .iter()
///     .map(|t| t.parse().unwrap())
///     .collect();
/// assert_eq!(smart_value(&hand), 21);
/// ```
#[must_use]
pub fn smart_value(cards: &[Card]) -> u32 {
    let mut value = hard_value(cards);
    let mut aces = cards.iter().filter(|card| card.rank == Rank::Ace).count();

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// Derives the render-ready value string for a hand.
///
/// `"BLACKJACK"` at a smart 21, `"BUST"` over 21, otherwise the smart
/// value — with the all-aces-low reading appended (`"17/7"`) while an ace
/// is still ambiguous between 1 and 11 without busting.
#[must_use]
pub fn value_label(cards: &[Card]) -> String {
    let smart = smart_value(cards);
    let soft = soft_value(cards);

    if smart > BLACKJACK {
        return "BUST".to_string();
    }
    if smart == BLACKJACK {
        return "BLACKJACK".to_string();
    }
    if soft != smart {
        return format!("{smart}/{soft}");
    }
    smart.to_string()
}
