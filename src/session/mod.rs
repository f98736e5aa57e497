//! Turn sequencing.
//!
//! [`GameSession`] is the stateful controller used by the shell. The free
//! functions below are the same steps over a bare [`HeapState`], for callers
//! that keep their own turn bookkeeping.
//!
//! ```
//! use rust_nim::core::{GameRng, HeapState, Move};
//! use rust_nim::session::{computer_turn, submit_human_move, Outcome};
//! use rust_nim::strategy::StrategyChoice;
//!
//! let mut state = HeapState::from_heaps(&[3, 4, 5]);
//! let mut rng = GameRng::new(0);
//!
//! assert_eq!(submit_human_move(&mut state, 2, 5), Ok(Outcome::Ongoing));
//! let (mv, outcome) = computer_turn(&mut state, StrategyChoice::Expert, &mut rng).unwrap();
//! assert_eq!(mv, Move::new(1, 1));
//! assert_eq!(outcome, Outcome::Ongoing);
//! ```

pub mod game;
pub mod outcome;

pub use game::{ComputerTurn, GameSession};
pub use outcome::{Outcome, TurnPhase};

use crate::core::{GameMode, GameRng, HeapState, Move, Side};
use crate::error::{MoveError, StrategyError};
use crate::strategy::StrategyChoice;

/// Deal a fresh layout for `mode`.
pub fn new_game(mode: GameMode, rng: &mut GameRng) -> HeapState {
    HeapState::new(mode, rng)
}

/// Apply a human move and report the outcome.
pub fn submit_human_move(
    state: &mut HeapState,
    heap: usize,
    count: u32,
) -> Result<Outcome, MoveError> {
    state.apply(Move::new(heap, count))?;
    Ok(Outcome::after_move(state, Side::Human))
}

/// Choose and apply the computer's move, returning it with the outcome.
pub fn computer_turn(
    state: &mut HeapState,
    strategy: StrategyChoice,
    rng: &mut GameRng,
) -> Result<(Move, Outcome), StrategyError> {
    let decision = strategy.decide(state, rng)?;
    state
        .apply(decision.mv)
        .map_err(|e| StrategyError::InvariantViolation(e.to_string()))?;
    Ok((decision.mv, Outcome::after_move(state, Side::Computer)))
}
