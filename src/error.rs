//! Structured error types.
//!
//! Heap numbers in messages are 1-based, matching what the player types.

use std::path::PathBuf;

/// A move rejected by [`HeapState::apply`](crate::core::HeapState::apply).
///
/// The heap state is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("heap {} does not exist (there are {heap_count} heaps)", .heap + 1)]
    HeapOutOfRange { heap: usize, heap_count: usize },

    #[error("cannot remove {count} items from a heap holding {available}")]
    RemoveCountOutOfRange { count: u32, available: u32 },
}

/// Errors raised by the computer strategies.
///
/// Neither occurs when the caller checks for a terminal state first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("no legal move: every heap is empty")]
    NoLegalMove,

    #[error("strategy invariant violated: {0}")]
    InvariantViolation(String),
}

/// Errors returned by the turn controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("it is not the human's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error("the game is over")]
    GameOver,

    #[error("computer strategy failed: {0}")]
    Strategy(#[from] StrategyError),
}

/// Errors from parsing a line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("expected a heap number and a count, got {0} values")]
    WrongArity(usize),

    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("heap numbers start at 1")]
    HeapNumberZero,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{0}")]
    BadArgument(String),
}

/// Errors that end the interactive shell.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
