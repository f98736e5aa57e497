//! Game session: owns one game and sequences its turns.

use im::Vector;
use log::{debug, info};

use crate::core::{GameMode, GameRng, HeapState, Move, MoveRecord, Side};
use crate::error::{StrategyError, TurnError};
use crate::strategy::StrategyChoice;

use super::outcome::{Outcome, TurnPhase};

/// What the computer did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerTurn {
    /// The move applied.
    pub mv: Move,

    /// True if Expert was in a losing position and played randomly.
    pub fallback: bool,

    /// Outcome after the move.
    pub outcome: Outcome,
}

/// A single game against the computer.
///
/// The session exclusively owns its heaps. They change only through
/// [`submit_human_move`](Self::submit_human_move) and
/// [`computer_turn`](Self::computer_turn); starting a new game replaces them.
/// The strategy can be switched at any point and is read at the start of
/// each computer turn.
///
/// Cloning is cheap: the history is a persistent vector.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: HeapState,
    strategy: StrategyChoice,
    phase: TurnPhase,
    rng: GameRng,
    history: Vector<MoveRecord>,
}

impl GameSession {
    /// Deal a new game for `mode`. The human moves first.
    pub fn new_game(mode: GameMode, strategy: StrategyChoice, mut rng: GameRng) -> Self {
        let state = HeapState::new(mode, &mut rng);
        info!("new {mode} game {state} against {strategy} (seed {})", rng.seed());
        Self::from_state(state, strategy, rng)
    }

    /// Start from an explicit position with the human to move.
    #[must_use]
    pub fn from_state(state: HeapState, strategy: StrategyChoice, rng: GameRng) -> Self {
        Self {
            state,
            strategy,
            phase: TurnPhase::AwaitingHumanMove,
            rng,
            history: Vector::new(),
        }
    }

    /// Discard the current game and deal a new one, keeping strategy and RNG.
    pub fn restart(&mut self, mode: GameMode) {
        self.state = HeapState::new(mode, &mut self.rng);
        self.phase = TurnPhase::AwaitingHumanMove;
        self.history = Vector::new();
        info!("new {mode} game {}", self.state);
    }

    /// Current heaps.
    #[must_use]
    pub fn state(&self) -> &HeapState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Outcome so far.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.phase.outcome()
    }

    /// Selected computer strategy.
    #[must_use]
    pub fn strategy(&self) -> StrategyChoice {
        self.strategy
    }

    /// Switch the computer strategy. Takes effect on its next turn.
    pub fn set_strategy(&mut self, strategy: StrategyChoice) {
        if strategy != self.strategy {
            debug!("strategy changed from {} to {strategy}", self.strategy);
            self.strategy = strategy;
        }
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Apply the human's move.
    ///
    /// A rejected move leaves the heaps, the phase and the history unchanged,
    /// so the human can simply try again.
    pub fn submit_human_move(&mut self, heap: usize, count: u32) -> Result<Outcome, TurnError> {
        self.expect_turn(Side::Human)?;

        let mv = Move::new(heap, count);
        self.state.apply(mv)?;
        Ok(self.finish_move(Side::Human, mv))
    }

    /// Let the computer move with the selected strategy.
    pub fn computer_turn(&mut self) -> Result<ComputerTurn, TurnError> {
        self.expect_turn(Side::Computer)?;

        let decision = self.strategy.decide(&self.state, &mut self.rng)?;
        self.state.apply(decision.mv).map_err(|e| {
            StrategyError::InvariantViolation(format!(
                "{} chose {:?}: {e}",
                self.strategy, decision.mv
            ))
        })?;

        let outcome = self.finish_move(Side::Computer, decision.mv);
        Ok(ComputerTurn {
            mv: decision.mv,
            fallback: decision.fallback,
            outcome,
        })
    }

    fn expect_turn(&self, side: Side) -> Result<(), TurnError> {
        match self.phase.to_move() {
            Some(to_move) if to_move == side => Ok(()),
            Some(_) => match side {
                Side::Human => Err(TurnError::NotHumanTurn),
                Side::Computer => Err(TurnError::NotComputerTurn),
            },
            None => Err(TurnError::GameOver),
        }
    }

    fn finish_move(&mut self, side: Side, mv: Move) -> Outcome {
        let ply = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord::new(side, mv, ply));

        let outcome = Outcome::after_move(&self.state, side);
        self.phase = TurnPhase::after(outcome, side);
        debug!("{side} played {mv}, heaps now {}", self.state);

        if let Some(winner) = outcome.winner() {
            info!("{winner} wins after {ply} moves");
        }
        outcome
    }
}
