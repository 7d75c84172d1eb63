//! Round resolution: turning final hand values into an outcome.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::hand::BLACKJACK;

/// The outcome of a finished round.
///
/// The dealer competes on equal footing with the human players here: no
/// dealer-wins-ties house rule, and the dealer can appear among the
/// drawing or winning names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every hand went over 21.
    EveryoneBusts,
    /// Every hand finished on the same value.
    EveryoneDraws {
        /// The shared value.
        value: u32,
    },
    /// Several hands tied for the best value at or under 21.
    Draw {
        /// The tied players, in roster order.
        names: Vec<String>,
        /// The tied value.
        value: u32,
    },
    /// A single hand held the best value at or under 21.
    Win {
        /// The winner.
        name: String,
        /// The winning value.
        value: u32,
    },
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EveryoneBusts => write!(f, "Everyone BUSTs"),
            Self::EveryoneDraws { value } => write!(f, "Everyone DRAWs on {value}"),
            Self::Draw { names, value } => {
                write!(f, "{} DRAW on {value}", names.join(" & "))
            }
            Self::Win { name, .. } => write!(f, "{name} WINS"),
        }
    }
}

/// Resolves a round from `(name, smart value)` pairs in roster order.
///
/// Busted hands stay in the comparisons — they can never match the best
/// value, which is capped at 21 — so a round where everyone busts, or
/// everyone lands on the same value, resolves as a table-wide result.
///
/// # Example
///
/// ```
/// use twentyone::{RoundOutcome, resolve};
///
/// let outcome = resolve(&[("Dealer", 23), ("Ann", 20), ("Ben", 20)]);
/// assert_eq!(
///     outcome,
///     RoundOutcome::Draw {
///         names: vec!["Ann".into(), "Ben".into()],
///         value: 20,
///     }
/// );
/// ```
#[must_use]
pub fn resolve(scores: &[(&str, u32)]) -> RoundOutcome {
    let best = scores
        .iter()
        .map(|(_, value)| *value)
        .filter(|value| *value <= BLACKJACK)
        .max();

    let Some(best) = best else {
        return RoundOutcome::EveryoneBusts;
    };

    if scores.iter().all(|(_, value)| *value == BLACKJACK) {
        return RoundOutcome::EveryoneDraws { value: BLACKJACK };
    }
    if scores.iter().all(|(_, value)| *value == best) {
        return RoundOutcome::EveryoneDraws { value: best };
    }

    let mut names: Vec<String> = scores
        .iter()
        .filter(|(_, value)| *value == best)
        .map(|(name, _)| name.to_string())
        .collect();

    if names.len() == 1 {
        RoundOutcome::Win {
            name: names.remove(0),
            value: best,
        }
    } else {
        RoundOutcome::Draw { names, value: best }
    }
}
