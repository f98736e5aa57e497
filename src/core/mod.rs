//! Core engine types: heaps, moves, sides, modes, RNG.
//!
//! Everything here is pure data plus validation. Turn order lives in
//! `session`, move choice in `strategy`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::Side;
pub use rng::{GameRng, GameRngState};
pub use config::{GameMode, MULTI_HEAP_COUNT, MULTI_HEAP_SIZE, SINGLE_HEAP_SIZE};
pub use action::{Move, MoveRecord};
pub use state::{HeapState, Heaps};
