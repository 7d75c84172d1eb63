//! Game engine: the table orchestrator and round flow.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DeckError, JoinError};
use crate::hand::smart_value;
use crate::io::{Prompter, Renderer, SeatView};
use crate::player::Roster;
use crate::result::{RoundOutcome, resolve};

mod actions;
mod dealer;
pub mod state;

pub use actions::Action;
pub use dealer::DEALER_STAND;
pub use state::RoundSignal;

/// Cards dealt to every seat at the start of a round.
const INITIAL_DEAL: usize = 2;

/// A blackjack table: the master deck, the seated players, and the
/// session flow across rounds.
///
/// The table exclusively owns the master deck and the roster; every
/// player exclusively owns its hand. Cards only ever move between the
/// deck and a hand, so their total count is constant within a round.
///
/// # Example
///
/// ```
/// use twentyone::Game;
///
/// let mut game = Game::new(2, 42);
/// game.join("Alice").unwrap();
/// game.begin_round().unwrap();
///
/// assert_eq!(game.roster.get(1).unwrap().hand().len(), 2);
/// assert_eq!(game.card_count(), 104);
/// ```
#[derive(Debug)]
pub struct Game {
    /// The master deck all hands are dealt from.
    pub deck: Deck,
    /// The seated players, dealer first.
    pub roster: Roster,
    /// Random number generator driving the shuffles.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a table with `sets` 52-card sets, shuffled once, and only
    /// the dealer seated.
    #[must_use]
    pub fn new(sets: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::with_sets(sets);
        deck.shuffle(&mut rng);

        Self {
            deck,
            roster: Roster::new(),
            rng,
        }
    }

    /// Seats a human player.
    ///
    /// # Errors
    ///
    /// Returns a [`JoinError`] for an empty, over-long, or already-taken
    /// name; the caller should re-prompt.
    pub fn join(&mut self, name: &str) -> Result<(), JoinError> {
        self.roster.join(name)
    }

    /// Total cards on the table: master deck plus every hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.roster.iter().map(|player| player.hand().len()).sum::<usize>()
    }

    /// Starts a fresh round: clears standing flags, returns every hand to
    /// the master deck, shuffles, and deals two cards per seat in roster
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck cannot cover the
    /// initial deal — too many players for too few sets.
    pub fn begin_round(&mut self) -> Result<(), DeckError> {
        for player in self.roster.iter_mut() {
            player.set_standing(false);
            self.deck.append(player.hand_mut());
        }

        self.deck.shuffle(&mut self.rng);

        for seat in 0..self.roster.len() {
            let cards = self.deck.draw(INITIAL_DEAL)?;
            if let Some(player) = self.roster.get_mut(seat) {
                player.hand_mut().extend(cards);
            }
        }

        Ok(())
    }

    /// Builds the render-ready view of every seat, in roster order.
    ///
    /// With `mask_dealer` set, the dealer's first card and value are
    /// hidden.
    #[must_use]
    pub fn seat_views(&self, mask_dealer: bool) -> Vec<SeatView> {
        self.roster
            .iter()
            .map(|player| SeatView::observe(player, mask_dealer))
            .collect()
    }

    /// Resolves the current hands into a round outcome.
    #[must_use]
    pub fn resolve_round(&self) -> RoundOutcome {
        let scores: Vec<(&str, u32)> = self
            .roster
            .iter()
            .map(|player| (player.name(), smart_value(player.hand().cards())))
            .collect();
        resolve(&scores)
    }

    /// Plays rounds until a player quits or the continue prompt is
    /// declined.
    ///
    /// Each round: deal, interactive turns, dealer play, final table,
    /// outcome, continue prompt. A quit ends the session immediately,
    /// with no outcome reported for the abandoned round.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the master deck cannot cover a
    /// deal or a mandatory draw.
    pub fn play<P, R>(&mut self, prompter: &mut P, renderer: &mut R) -> Result<(), DeckError>
    where
        P: Prompter,
        R: Renderer,
    {
        loop {
            self.begin_round()?;

            match self.run_turns(prompter, renderer)? {
                RoundSignal::PlayerQuit => return Ok(()),
                RoundSignal::Completed | RoundSignal::DealerBlackjack => {}
            }

            self.dealer_play(renderer)?;

            renderer.table(&self.seat_views(false));
            let outcome = self.resolve_round();
            renderer.outcome(&outcome);

            if !prompter.confirm("Play again?") {
                return Ok(());
            }
        }
    }
}
