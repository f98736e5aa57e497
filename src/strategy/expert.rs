use log::warn;

use crate::core::{GameRng, HeapState, Move};
use crate::error::StrategyError;

use super::novice::Novice;
use super::{Decision, Strategy};

/// Optimal play by the nim-sum rule.
///
/// With a non-zero nim-sum `s` there is always a heap `h` with `h ^ s < h`;
/// reducing it to `h ^ s` leaves a nim-sum of zero. The lowest-indexed such
/// heap is used so results are reproducible.
///
/// From a zero nim-sum no move keeps the win, so Expert plays a Novice move
/// and reports `fallback`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Expert;

impl Expert {
    /// The winning move from `state`, or `None` if its nim-sum is zero.
    ///
    /// Errors with `InvariantViolation` if the nim-sum is non-zero and no
    /// heap qualifies, which cannot happen for a well-formed state.
    pub fn winning_move(state: &HeapState) -> Result<Option<Move>, StrategyError> {
        let nim_sum = state.nim_sum();
        if nim_sum == 0 {
            return Ok(None);
        }

        state
            .heaps()
            .iter()
            .enumerate()
            .find_map(|(i, &h)| {
                let target = h ^ nim_sum;
                (target < h).then(|| Move::new(i, h - target))
            })
            .map(Some)
            .ok_or_else(|| {
                StrategyError::InvariantViolation(format!(
                    "nim-sum {nim_sum} of {state} but no heap can be reduced"
                ))
            })
    }
}

impl Strategy for Expert {
    fn name(&self) -> &'static str {
        "expert"
    }

    fn choose_move(&self, state: &HeapState, rng: &mut GameRng) -> Result<Decision, StrategyError> {
        if state.is_terminal() {
            return Err(StrategyError::NoLegalMove);
        }

        match Self::winning_move(state)? {
            Some(mv) => Ok(Decision::regular(mv)),
            None => {
                warn!("expert is in a losing position at {state}, playing randomly");
                let mv = Novice::random_move(state, rng)?;
                Ok(Decision { mv, fallback: true })
            }
        }
    }
}
