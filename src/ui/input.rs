//! Parsing of lines typed at the prompt.

use crate::core::GameMode;
use crate::error::InputError;
use crate::strategy::StrategyChoice;

/// A parsed prompt line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Remove `count` items from heap `heap` (0-based, converted from the
    /// 1-based number the player typed).
    Move { heap: usize, count: u32 },
    /// Switch the computer strategy.
    Strategy(StrategyChoice),
    /// Abandon the current game and deal a new one.
    New(GameMode),
    Help,
    Quit,
}

/// Parse one line of input.
///
/// A move is two numbers: the 1-based heap number and the count. Counts are
/// only checked for being numbers here; range checks belong to the engine.
///
/// ```
/// use rust_nim::ui::{parse_command, Command};
///
/// assert_eq!(parse_command("2 3"), Ok(Command::Move { heap: 1, count: 3 }));
/// assert_eq!(parse_command("quit"), Ok(Command::Quit));
/// ```
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = words.first() else {
        return Err(InputError::Empty);
    };

    match first.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "help" | "?" => return Ok(Command::Help),
        "strategy" => {
            let arg = single_argument(&words)?;
            return arg
                .parse()
                .map(Command::Strategy)
                .map_err(InputError::BadArgument);
        }
        "new" => {
            let arg = single_argument(&words)?;
            return arg.parse().map(Command::New).map_err(InputError::BadArgument);
        }
        _ => {}
    }

    if !first.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
        return Err(InputError::UnknownCommand(first.to_string()));
    }
    if words.len() != 2 {
        return Err(InputError::WrongArity(words.len()));
    }

    let heap_number = parse_number(words[0])?;
    let count = parse_number(words[1])?;
    let heap = heap_number.checked_sub(1).ok_or(InputError::HeapNumberZero)? as usize;

    Ok(Command::Move { heap, count })
}

fn single_argument<'a>(words: &[&'a str]) -> Result<&'a str, InputError> {
    match words {
        [_, arg] => Ok(*arg),
        _ => Err(InputError::BadArgument(format!(
            "'{}' takes exactly one argument",
            words[0]
        ))),
    }
}

fn parse_number(word: &str) -> Result<u32, InputError> {
    word.parse()
        .map_err(|_| InputError::NotANumber(word.to_string()))
}
