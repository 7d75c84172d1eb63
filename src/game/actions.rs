//! Player actions and the interactive turn loop.

use crate::error::DeckError;
use crate::hand::{BLACKJACK, smart_value};
use crate::io::{Prompter, Renderer};
use crate::player::Player;

use super::{Game, RoundSignal};

/// A player's answer to the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Stop acting for this round.
    Stand,
    /// End the whole session.
    Quit,
    /// Unrecognized input; the engine asks again.
    Invalid,
}

impl Action {
    /// Parses the action text protocol: the menu numbers `1`/`2`/`3` or
    /// any case-insensitive prefix of `hit`, `stand`, or `quit`.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Action;
    ///
    /// assert_eq!(Action::parse("h"), Action::Hit);
    /// assert_eq!(Action::parse("STA"), Action::Stand);
    /// assert_eq!(Action::parse("3"), Action::Quit);
    /// assert_eq!(Action::parse("x"), Action::Invalid);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Invalid;
        }

        match input {
            "1" => Self::Hit,
            "2" => Self::Stand,
            "3" => Self::Quit,
            _ if is_prefix(input, "hit") => Self::Hit,
            _ if is_prefix(input, "stand") => Self::Stand,
            _ if is_prefix(input, "quit") => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

fn is_prefix(input: &str, word: &str) -> bool {
    input.len() <= word.len() && word[..input.len()].eq_ignore_ascii_case(input)
}

impl Game {
    /// Runs the interactive turn phase: each seat acts in roster order
    /// until standing, busted, or at 21.
    ///
    /// A dealer dealt 21 short-circuits the phase; the dealer is otherwise
    /// marked standing without acting, and plays after the humans via
    /// [`dealer_play`](Game::dealer_play). Invalid actions are re-solicited
    /// without a state transition.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if a hit outruns the master deck.
    pub fn run_turns<P, R>(
        &mut self,
        prompter: &mut P,
        renderer: &mut R,
    ) -> Result<RoundSignal, DeckError>
    where
        P: Prompter,
        R: Renderer,
    {
        for seat in 0..self.roster.len() {
            let is_dealer = self.roster.get(seat).is_some_and(Player::is_dealer);

            if is_dealer && self.seat_value(seat) == BLACKJACK {
                return Ok(RoundSignal::DealerBlackjack);
            }

            while self.seat_value(seat) < BLACKJACK && !self.seat_standing(seat) {
                if is_dealer {
                    // Not person-controlled; plays after the humans.
                    if let Some(dealer) = self.roster.get_mut(seat) {
                        dealer.set_standing(true);
                    }
                    break;
                }

                renderer.table(&self.seat_views(true));

                let name = self
                    .roster
                    .get(seat)
                    .map(Player::name)
                    .unwrap_or_default();
                match prompter.action(name) {
                    Action::Invalid => {}
                    Action::Quit => return Ok(RoundSignal::PlayerQuit),
                    Action::Hit => self.hit(seat, renderer)?,
                    Action::Stand => {
                        if let Some(player) = self.roster.get_mut(seat) {
                            player.set_standing(true);
                        }
                    }
                }
            }
        }

        Ok(RoundSignal::Completed)
    }

    /// Draws one card from the master deck into the given seat's hand.
    pub(super) fn hit<R: Renderer>(
        &mut self,
        seat: usize,
        renderer: &mut R,
    ) -> Result<(), DeckError> {
        let card = self.deck.draw_one()?;
        if let Some(player) = self.roster.get_mut(seat) {
            renderer.drawn(player.name(), card);
            player.hand_mut().push(card);
        }
        Ok(())
    }

    fn seat_value(&self, seat: usize) -> u32 {
        self.roster
            .get(seat)
            .map_or(0, |player| smart_value(player.hand().cards()))
    }

    fn seat_standing(&self, seat: usize) -> bool {
        self.roster
            .get(seat)
            .is_some_and(Player::is_standing)
    }
}
