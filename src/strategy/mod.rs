//! Computer move selection.
//!
//! Strategies are trait-based so the session and the shell can treat them
//! uniformly:
//! - [`Novice`]: a uniformly random legal move
//! - [`Expert`]: the nim-sum move, falling back to [`Novice`] from a losing
//!   position
//!
//! [`StrategyChoice`] is the plain enum the session stores and the shell
//! parses; it resolves to one of the strategy types.
//!
//! ## Usage
//!
//! ```
//! use rust_nim::core::{GameRng, HeapState, Move};
//! use rust_nim::strategy::StrategyChoice;
//!
//! let state = HeapState::from_heaps(&[5, 3, 7]);
//! let mut rng = GameRng::new(0);
//!
//! let decision = StrategyChoice::Expert.decide(&state, &mut rng).unwrap();
//! assert_eq!(decision.mv, Move::new(0, 1));
//! assert!(!decision.fallback);
//! ```

pub mod expert;
pub mod novice;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, HeapState, Move};
use crate::error::StrategyError;

pub use expert::Expert;
pub use novice::Novice;

/// A move chosen by a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// The move to apply.
    pub mv: Move,

    /// True when Expert found no winning move and played randomly instead.
    pub fallback: bool,
}

impl Decision {
    /// A decision reached by the strategy's own rule.
    #[must_use]
    pub const fn regular(mv: Move) -> Self {
        Self { mv, fallback: false }
    }
}

/// Policy for choosing the computer's move.
///
/// Implementations must return a move that `HeapState::apply` accepts for
/// any non-terminal state, and `StrategyError::NoLegalMove` for a terminal
/// one.
pub trait Strategy: Send + Sync {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Choose a move for `state`.
    fn choose_move(&self, state: &HeapState, rng: &mut GameRng) -> Result<Decision, StrategyError>;
}

/// Difficulty selected for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyChoice {
    /// Optimal nim-sum play.
    Expert,
    /// Random play.
    #[default]
    Novice,
}

impl StrategyChoice {
    /// Resolve to the strategy implementation.
    #[must_use]
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            StrategyChoice::Expert => &Expert,
            StrategyChoice::Novice => &Novice,
        }
    }

    /// Choose a move with the selected strategy.
    pub fn decide(self, state: &HeapState, rng: &mut GameRng) -> Result<Decision, StrategyError> {
        self.strategy().choose_move(state, rng)
    }
}

impl std::fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.strategy().name())
    }
}

impl FromStr for StrategyChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "expert" => Ok(StrategyChoice::Expert),
            "novice" => Ok(StrategyChoice::Novice),
            other => Err(format!(
                "unknown strategy '{other}' (expected expert or novice)"
            )),
        }
    }
}
