use crate::core::{GameRng, HeapState, Move};
use crate::error::StrategyError;

use super::{Decision, Strategy};

/// Uniformly random play.
///
/// Picks a non-empty heap uniformly, then a count uniformly from
/// `1..=size`. Note this is not uniform over all legal moves: small heaps
/// are chosen as often as large ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct Novice;

impl Novice {
    /// The random move itself, shared with Expert's fallback.
    pub fn random_move(state: &HeapState, rng: &mut GameRng) -> Result<Move, StrategyError> {
        let candidates = state.non_empty_heaps();
        let &(heap, size) = rng
            .choose(&candidates)
            .ok_or(StrategyError::NoLegalMove)?;
        let count = rng.gen_range(1..=size);
        Ok(Move::new(heap, count))
    }
}

impl Strategy for Novice {
    fn name(&self) -> &'static str {
        "novice"
    }

    fn choose_move(&self, state: &HeapState, rng: &mut GameRng) -> Result<Decision, StrategyError> {
        Self::random_move(state, rng).map(Decision::regular)
    }
}
