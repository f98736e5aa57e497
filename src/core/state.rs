//! Heap state: the only mutable game data.
//!
//! ## HeapState
//!
//! An ordered list of heap sizes. The number of heaps is fixed for the
//! lifetime of a game; sizes only shrink, and only through [`HeapState::apply`].
//!
//! Heaps are stored inline in a `SmallVec` since a game never has more than
//! five of them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Move;
use super::config::{GameMode, MULTI_HEAP_COUNT, MULTI_HEAP_SIZE, SINGLE_HEAP_SIZE};
use super::rng::GameRng;
use crate::error::MoveError;

/// Inline storage for heap sizes.
pub type Heaps = SmallVec<[u32; 5]>;

/// The heaps of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeapState {
    heaps: Heaps,
}

impl HeapState {
    /// Deal a fresh layout for `mode`.
    pub fn new(mode: GameMode, rng: &mut GameRng) -> Self {
        match mode {
            GameMode::Single => Self::init_single(rng),
            GameMode::Multi => Self::init_multi(rng),
        }
    }

    /// One heap with 5-10 items.
    pub fn init_single(rng: &mut GameRng) -> Self {
        let mut heaps = Heaps::new();
        heaps.push(rng.gen_range(SINGLE_HEAP_SIZE));
        Self { heaps }
    }

    /// 3-5 heaps with 3-7 items each.
    pub fn init_multi(rng: &mut GameRng) -> Self {
        let count = rng.gen_range(MULTI_HEAP_COUNT);
        let heaps = (0..count).map(|_| rng.gen_range(MULTI_HEAP_SIZE)).collect();
        Self { heaps }
    }

    /// Build a state from explicit heap sizes.
    ///
    /// ```
    /// use rust_nim::core::HeapState;
    ///
    /// let state = HeapState::from_heaps(&[3, 4, 5]);
    /// assert_eq!(state.nim_sum(), 2);
    /// ```
    #[must_use]
    pub fn from_heaps(heaps: &[u32]) -> Self {
        Self {
            heaps: SmallVec::from_slice(heaps),
        }
    }

    /// Heap sizes in index order.
    #[must_use]
    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// Number of heaps (including empty ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.heaps.len()
    }

    /// True if the state has no heaps at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heaps.is_empty()
    }

    /// Size of heap `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.heaps.get(index).copied()
    }

    /// Items left across all heaps.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.heaps.iter().sum()
    }

    /// Check a move against this state without applying it.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        let available = self.get(mv.heap).ok_or(MoveError::HeapOutOfRange {
            heap: mv.heap,
            heap_count: self.len(),
        })?;

        if mv.count == 0 || mv.count > available {
            return Err(MoveError::RemoveCountOutOfRange {
                count: mv.count,
                available,
            });
        }

        Ok(())
    }

    /// Apply a move.
    ///
    /// On error the state is left untouched.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        self.validate(mv)?;
        self.heaps[mv.heap] -= mv.count;
        Ok(())
    }

    /// True iff every heap is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    /// `(index, size)` of every heap with items left, in index order.
    #[must_use]
    pub fn non_empty_heaps(&self) -> SmallVec<[(usize, u32); 5]> {
        self.heaps
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, h)| h > 0)
            .collect()
    }

    /// XOR of all heap sizes.
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.heaps.iter().fold(0, |acc, &h| acc ^ h)
    }
}

impl std::fmt::Display for HeapState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, h) in self.heaps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{h}")?;
        }
        write!(f, "]")
    }
}
