//! Round flow signals.

/// How the interactive turn phase of a round ended.
///
/// Quitting is a normal terminal outcome of the state machine, not an
/// error; failures (like drawing from an empty deck) travel separately as
/// [`DeckError`](crate::error::DeckError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundSignal {
    /// Every player finished acting; the round proceeds to dealer play
    /// and resolution.
    Completed,
    /// The dealer was dealt 21 on the initial deal; the round resolves
    /// immediately without further turns.
    DealerBlackjack,
    /// A player chose to quit, ending the whole session.
    PlayerQuit,
}
