//! Line-oriented game loop.
//!
//! The shell owns a [`GameSession`] and talks to the player through any
//! `BufRead`/`Write` pair, so tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::error::{InputError, ShellError, TurnError};
use crate::session::GameSession;

use super::input::{parse_command, Command};
use super::render::{describe_computer_turn, describe_hint, describe_outcome, render_heaps};

const HELP: &str = "\
commands:
  <heap> <count>     take <count> items from heap number <heap>
  strategy <name>    switch the computer to 'expert' or 'novice'
  new <mode>         start a 'single' or 'multi' heap game
  help               show this text
  quit               leave";

/// Interactive front end for one session.
pub struct Shell<R, W> {
    session: GameSession,
    input: R,
    output: W,
    computer_delay: Duration,
    show_hints: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Wrap `session`, reading commands from `input` and writing to `output`.
    ///
    /// Starts with no computer delay and hints off.
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            computer_delay: Duration::ZERO,
            show_hints: false,
        }
    }

    /// Pause before each computer move.
    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    /// Print a nim-sum hint whenever the human is to move.
    pub fn with_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        writeln!(
            self.output,
            "Nim: take the last item to win. Computer strategy: {}",
            self.session.strategy()
        )?;
        self.show_board()?;
        self.prompt_human()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    self.report_input_error(&e)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::Strategy(choice) => {
                    self.session.set_strategy(choice);
                    writeln!(self.output, "Computer strategy: {choice}")?;
                }
                Command::New(mode) => {
                    self.session.restart(mode);
                    self.show_board()?;
                    self.prompt_human()?;
                }
                Command::Move { heap, count } => self.play_round(heap, count)?,
            }
        }

        Ok(())
    }

    fn play_round(&mut self, heap: usize, count: u32) -> Result<(), ShellError> {
        let outcome = match self.session.submit_human_move(heap, count) {
            Ok(outcome) => outcome,
            Err(TurnError::InvalidMove(e)) => {
                writeln!(self.output, "Move rejected: {e}")?;
                return Ok(());
            }
            Err(TurnError::GameOver) => {
                writeln!(self.output, "The game is over. Type 'new single' or 'new multi'.")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        self.show_board()?;
        if let Some(message) = describe_outcome(outcome) {
            writeln!(self.output, "{message}")?;
            return Ok(());
        }

        if !self.computer_delay.is_zero() {
            std::thread::sleep(self.computer_delay);
        }

        let strategy = self.session.strategy();
        let turn = self.session.computer_turn()?;
        writeln!(self.output, "{}", describe_computer_turn(strategy, &turn))?;
        self.show_board()?;

        match describe_outcome(turn.outcome) {
            Some(message) => writeln!(self.output, "{message}")?,
            None => self.prompt_human()?,
        }
        Ok(())
    }

    fn report_input_error(&mut self, e: &InputError) -> Result<(), ShellError> {
        match e {
            InputError::NotANumber(_) | InputError::WrongArity(_) | InputError::HeapNumberZero => {
                writeln!(self.output, "Please enter valid numbers: {e}")?
            }
            InputError::Empty | InputError::UnknownCommand(_) | InputError::BadArgument(_) => {
                writeln!(self.output, "{e}")?
            }
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<(), ShellError> {
        write!(self.output, "{}", render_heaps(self.session.state()))?;
        Ok(())
    }

    fn prompt_human(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "Your turn!")?;
        if self.show_hints {
            writeln!(self.output, "{}", describe_hint(self.session.state()))?;
        }
        Ok(())
    }
}
