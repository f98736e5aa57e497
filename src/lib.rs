//! # rust-nim
//!
//! Multi-heap Nim against a computer opponent.
//!
//! ## Rules
//!
//! Players alternately remove one or more items from a single heap. Whoever
//! takes the last item wins. The human always moves first.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: heaps, strategies and turn order never touch I/O.
//!    The terminal shell in [`ui`] only calls into [`session`].
//!
//! 2. **Reproducible**: all randomness flows through one seeded
//!    [`GameRng`], so a seed replays setup and Novice moves exactly.
//!
//! 3. **Rejections are free**: an invalid move returns an error and leaves
//!    the game exactly as it was.
//!
//! ## Modules
//!
//! - `core`: heaps, moves, sides, game modes, RNG
//! - `strategy`: Novice (random) and Expert (nim-sum) computer play
//! - `session`: turn controller and outcomes
//! - `analysis`: Sprague-Grundy helpers
//! - `ui`: text rendering, input parsing, interactive shell
//! - `config`: TOML configuration
//! - `error`: structured error types

pub mod core;
pub mod strategy;
pub mod session;
pub mod analysis;
pub mod ui;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameMode, GameRng, GameRngState, HeapState, Move, MoveRecord, Side};

pub use crate::strategy::{Decision, Expert, Novice, Strategy, StrategyChoice};

pub use crate::session::{
    computer_turn, new_game, submit_human_move, ComputerTurn, GameSession, Outcome, TurnPhase,
};

pub use crate::error::{InputError, MoveError, StrategyError, TurnError};
