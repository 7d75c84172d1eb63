//! The input and display ports the engine drives a round through.
//!
//! The core performs no terminal I/O itself: it asks a [`Prompter`] for
//! decisions and hands a [`Renderer`] render-ready data. Front-ends (see
//! `demos/cli_blackjack.rs`) implement both over whatever medium they like.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::card::Card;
use crate::game::Action;
use crate::hand::value_label;
use crate::player::Player;
use crate::result::RoundOutcome;

/// Placeholder shown for the dealer's hidden card and value.
pub const MASK: &str = "??";

/// Blocking input requests. Implementations validate locally and ask
/// again on bad input; they never fail.
pub trait Prompter {
    /// Solicits the named player's next action. Unparseable input is
    /// reported as [`Action::Invalid`], which the engine re-solicits.
    fn action(&mut self, player: &str) -> Action;

    /// Asks a yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Asks for an integer within `bounds`.
    fn number(&mut self, prompt: &str, bounds: RangeInclusive<u32>) -> u32;
}

/// Display sink for the table state and round events.
pub trait Renderer {
    /// Shows the table, one view per seat in roster order.
    fn table(&mut self, seats: &[SeatView]);

    /// Reports a card drawn into the named player's hand.
    fn drawn(&mut self, player: &str, card: Card);

    /// Reports the round outcome.
    fn outcome(&mut self, outcome: &RoundOutcome);
}

/// A render-ready view of one seat: the name, the card tokens (with the
/// dealer's first card masked while hidden), and the value string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    /// The player's name.
    pub name: String,
    /// Card tokens in hand order; [`MASK`] in place of a hidden card.
    pub cards: Vec<String>,
    /// The value string per the display derivation, or [`MASK`] while the
    /// dealer's hand is hidden.
    pub value: String,
}

impl SeatView {
    /// Builds the view of a player's seat.
    ///
    /// With `mask_dealer` set, a dealer's first card and value are
    /// replaced by [`MASK`]; other seats are unaffected.
    #[must_use]
    pub fn observe(player: &Player, mask_dealer: bool) -> Self {
        let masked = mask_dealer && player.is_dealer();

        let cards = player
            .hand()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if masked && i == 0 {
                    MASK.to_string()
                } else {
                    card.to_string()
                }
            })
            .collect();

        let value = if masked {
            MASK.to_string()
        } else {
            value_label(player.hand().cards())
        };

        Self {
            name: player.name().to_string(),
            cards,
            value,
        }
    }
}
