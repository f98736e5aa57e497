//! Move representation: a heap index and a remove count.
//!
//! Moves are transient. They are produced by the human (via the shell) or
//! by a strategy and consumed immediately by `HeapState::apply`. The session
//! keeps a `MoveRecord` of each applied move for display.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A single move: remove `count` items from heap `heap`.
///
/// `heap` is 0-based. Validity depends on the state it is applied to, so a
/// `Move` by itself may be illegal.
///
/// ```
/// use rust_nim::core::Move;
///
/// let mv = Move::new(2, 3);
/// assert_eq!(mv.to_string(), "take 3 from heap 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 0-based heap index.
    pub heap: usize,

    /// Number of items to remove.
    pub count: u32,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(heap: usize, count: u32) -> Self {
        Self { heap, count }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from heap {}", self.count, self.heap + 1)
    }
}

/// An applied move with the side that made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The move applied.
    pub mv: Move,

    /// Ply number, starting at 1.
    pub ply: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, mv: Move, ply: u32) -> Self {
        Self { side, mv, ply }
    }
}
