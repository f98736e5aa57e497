//! Text rendering of heaps and status lines.

use crate::analysis::is_losing_position;
use crate::core::HeapState;
use crate::session::{ComputerTurn, Outcome};
use crate::strategy::StrategyChoice;

const ITEM: char = '#';

/// One line per heap, numbered from 1.
///
/// ```
/// use rust_nim::core::HeapState;
/// use rust_nim::ui::render_heaps;
///
/// let text = render_heaps(&HeapState::from_heaps(&[2, 0]));
/// assert_eq!(text, "heap 1 | ## (2 left)\nheap 2 |  (0 left)\n");
/// ```
#[must_use]
pub fn render_heaps(state: &HeapState) -> String {
    let mut out = String::new();
    for (i, &size) in state.heaps().iter().enumerate() {
        let items: String = std::iter::repeat(ITEM).take(size as usize).collect();
        out.push_str(&format!("heap {} | {items} ({size} left)\n", i + 1));
    }
    out
}

/// Status line describing the computer's move.
#[must_use]
pub fn describe_computer_turn(strategy: StrategyChoice, turn: &ComputerTurn) -> String {
    if turn.fallback {
        format!("{strategy} is in trouble and plays randomly: {}", turn.mv)
    } else {
        format!("{strategy} plays: {}", turn.mv)
    }
}

/// Final message for a finished game, `None` while it is still running.
#[must_use]
pub fn describe_outcome(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::HumanWon => Some("You took the last item. You win!"),
        Outcome::ComputerWon => Some("The computer took the last item. You lose."),
    }
}

/// Hint for the human, who is about to move in `state`.
#[must_use]
pub fn describe_hint(state: &HeapState) -> String {
    if is_losing_position(state) {
        format!("hint: nim-sum is 0, every move from {state} loses against perfect play")
    } else {
        format!("hint: nim-sum is {}, a winning move exists", state.nim_sum())
    }
}
