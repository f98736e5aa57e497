//! Turn phases and game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{HeapState, Side};

/// Result of the game so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one heap still has items.
    Ongoing,
    /// The human took the last item.
    HumanWon,
    /// The computer took the last item.
    ComputerWon,
}

impl Outcome {
    /// Outcome once `mover` has moved into `state`.
    ///
    /// Whoever empties the last heap wins.
    #[must_use]
    pub fn after_move(state: &HeapState, mover: Side) -> Self {
        if !state.is_terminal() {
            return Outcome::Ongoing;
        }
        match mover {
            Side::Human => Outcome::HumanWon,
            Side::Computer => Outcome::ComputerWon,
        }
    }

    /// The winning side, if the game is over.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Ongoing => None,
            Outcome::HumanWon => Some(Side::Human),
            Outcome::ComputerWon => Some(Side::Computer),
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Where a session is in its turn cycle.
///
/// ```text
/// AwaitingHumanMove --valid move--> AwaitingComputerMove --computer move--> AwaitingHumanMove
///        |                                   |
///        +--empties last heap--> HumanWon    +--empties last heap--> ComputerWon
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingHumanMove,
    AwaitingComputerMove,
    HumanWon,
    ComputerWon,
}

impl TurnPhase {
    /// The phase that follows `outcome` after `mover` moved.
    #[must_use]
    pub fn after(outcome: Outcome, mover: Side) -> Self {
        match outcome {
            Outcome::HumanWon => TurnPhase::HumanWon,
            Outcome::ComputerWon => TurnPhase::ComputerWon,
            Outcome::Ongoing => match mover.other() {
                Side::Human => TurnPhase::AwaitingHumanMove,
                Side::Computer => TurnPhase::AwaitingComputerMove,
            },
        }
    }

    /// The side expected to move, if any.
    #[must_use]
    pub fn to_move(self) -> Option<Side> {
        match self {
            TurnPhase::AwaitingHumanMove => Some(Side::Human),
            TurnPhase::AwaitingComputerMove => Some(Side::Computer),
            TurnPhase::HumanWon | TurnPhase::ComputerWon => None,
        }
    }

    /// Outcome implied by this phase.
    #[must_use]
    pub fn outcome(self) -> Outcome {
        match self {
            TurnPhase::HumanWon => Outcome::HumanWon,
            TurnPhase::ComputerWon => Outcome::ComputerWon,
            _ => Outcome::Ongoing,
        }
    }
}
