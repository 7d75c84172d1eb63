//! Players and the table roster.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::JoinError;

/// Maximum player name length, in characters.
pub const MAX_NAME_LEN: usize = 11;

/// The part a player takes in the round flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The house player: skipped in the interactive phase, auto-played
    /// after it.
    Dealer,
    /// A human player acting through the input port.
    Human,
}

/// A seated player: a name, a role, an owned hand, and the standing flag
/// for the current round.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    role: Role,
    hand: Deck,
    standing: bool,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            role,
            hand: Deck::with_sets(0),
            standing: false,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this player is the dealer.
    #[must_use]
    pub fn is_dealer(&self) -> bool {
        self.role == Role::Dealer
    }

    /// The player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Deck {
        &self.hand
    }

    /// Mutable access to the player's hand.
    pub const fn hand_mut(&mut self) -> &mut Deck {
        &mut self.hand
    }

    /// Returns whether the player has stopped acting this round.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Sets the standing flag.
    pub const fn set_standing(&mut self, standing: bool) {
        self.standing = standing;
    }
}

/// The insertion-ordered set of seated players.
///
/// The dealer is always present and seated first; human players follow in
/// join order. Iteration order is the acting and resolution order.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Creates a roster holding only the dealer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: alloc::vec![Player::new("Dealer", Role::Dealer)],
        }
    }

    /// Seats a human player.
    ///
    /// # Errors
    ///
    /// Returns a [`JoinError`] if the name is empty, longer than
    /// [`MAX_NAME_LEN`] characters, or already taken (case-insensitively;
    /// this also keeps `"Dealer"` unclaimable).
    pub fn join(&mut self, name: &str) -> Result<(), JoinError> {
        if name.is_empty() {
            return Err(JoinError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(JoinError::NameTooLong);
        }
        if self
            .players
            .iter()
            .any(|player| player.name().eq_ignore_ascii_case(name))
        {
            return Err(JoinError::DuplicateName);
        }

        self.players.push(Player::new(name, Role::Human));
        Ok(())
    }

    /// The number of seats, dealer included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether the roster is empty. It never is: the dealer is
    /// always seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the player at the given seat.
    #[must_use]
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns mutable access to the player at the given seat.
    pub fn get_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// The dealer's seat.
    #[must_use]
    pub fn dealer(&self) -> &Player {
        &self.players[0]
    }

    /// Mutable access to the dealer's seat.
    pub fn dealer_mut(&mut self) -> &mut Player {
        &mut self.players[0]
    }

    /// Iterates the seats in acting order.
    pub fn iter(&self) -> core::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Iterates the seats mutably in acting order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Player> {
        self.players.iter_mut()
    }

    /// Iterates the non-dealer seats in acting order.
    pub fn humans(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| !player.is_dealer())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = core::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
