//! Append-only conversation history with bounded read views.
//!
//! The buffer keeps every turn of a session in chronological order. Callers
//! never see it shrink; the context and display windows are slices over its
//! tail, computed at read time.

use learnix_types::chat::Turn;

/// Ordered history of one conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationBuffer {
    turns: Vec<Turn>,
}

impl ConversationBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a turn at the end of the history.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The last `n` turns, oldest first, for building a model prompt.
    ///
    /// Returns fewer when the history is shorter and nothing when `n` is 0.
    pub fn context_window(&self, n: usize) -> &[Turn] {
        self.tail(n)
    }

    /// The last `m` turns, oldest first, for presentation.
    ///
    /// Same contract as [`context_window`](Self::context_window) with an
    /// independent size.
    pub fn display_window(&self, m: usize) -> &[Turn] {
        self.tail(m)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn tail(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }
}
