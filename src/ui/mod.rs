//! Terminal presentation: rendering, input parsing, and the game loop.
//!
//! Nothing here decides anything about the game; it only calls the session
//! and prints what comes back.

pub mod input;
pub mod render;
pub mod shell;

pub use input::{parse_command, Command};
pub use render::{describe_computer_turn, describe_hint, describe_outcome, render_heaps};
pub use shell::Shell;
