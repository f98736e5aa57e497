//! The two sides of a game.

use serde::{Deserialize, Serialize};

/// Who made a move.
///
/// The human always moves first in a fresh game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the other side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}
