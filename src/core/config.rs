//! Game modes and the randomized setup rules.
//!
//! The ranges are fixed; only the mode is chosen per game.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Size range of the only heap in single-heap mode.
pub const SINGLE_HEAP_SIZE: RangeInclusive<u32> = 5..=10;

/// Number of heaps in multi-heap mode.
pub const MULTI_HEAP_COUNT: RangeInclusive<u32> = 3..=5;

/// Size range of each heap in multi-heap mode.
pub const MULTI_HEAP_SIZE: RangeInclusive<u32> = 3..=7;

/// Which initial layout to deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One heap of 5-10 items.
    Single,
    /// 3-5 heaps of 3-7 items each.
    #[default]
    Multi,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Single => write!(f, "single"),
            GameMode::Multi => write!(f, "multi"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(GameMode::Single),
            "multi" => Ok(GameMode::Multi),
            other => Err(format!("unknown game mode '{other}' (expected single or multi)")),
        }
    }
}
