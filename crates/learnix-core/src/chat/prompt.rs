//! Prompt assembly for the conversational model.
//!
//! Turns are rendered as `"<Label>: <text>"` and joined with a single space.
//! Text is passed through verbatim: no trimming and no escaping.

use learnix_types::chat::Turn;

/// Separator placed between rendered turns.
pub const TURN_SEPARATOR: &str = " ";

/// Render a window of turns as a single prompt string.
pub fn assemble(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}", turn.speaker().prompt_label(), turn.text()))
        .collect::<Vec<_>>()
        .join(TURN_SEPARATOR)
}
