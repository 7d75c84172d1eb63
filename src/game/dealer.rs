//! Dealer auto-play.

use crate::error::DeckError;
use crate::hand::{BLACKJACK, smart_value};
use crate::io::Renderer;

use super::Game;

/// Hand value the dealer must reach before standing.
pub const DEALER_STAND: u32 = 17;

impl Game {
    /// Plays out the dealer's hand after the interactive phase.
    ///
    /// The dealer draws one card at a time until reaching
    /// [`DEALER_STAND`], but only while at least one human hand is still
    /// at or under 21 — with every human busted there is nobody left for
    /// a further draw to beat.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the master deck runs out while
    /// the dealer must draw.
    pub fn dealer_play<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), DeckError> {
        let any_live = self
            .roster
            .humans()
            .any(|player| smart_value(player.hand().cards()) <= BLACKJACK);
        if !any_live {
            return Ok(());
        }

        while smart_value(self.roster.dealer().hand().cards()) < DEALER_STAND {
            let card = self.deck.draw_one()?;
            renderer.drawn(self.roster.dealer().name(), card);
            self.roster.dealer_mut().hand_mut().push(card);
        }

        Ok(())
    }
}
