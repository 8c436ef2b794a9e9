//! Per-conversation state.
//!
//! A `ChatSession` owns its conversation buffer together with the window
//! sizes and activity timestamps for one user's session. There is no global
//! history: whoever holds the session holds the conversation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use learnix_types::chat::{DisplayTurn, SessionInfo, Turn, WindowConfig};

use super::buffer::ConversationBuffer;
use super::prompt::assemble;

/// One chat session and its conversation history.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    last_active_at: Option<DateTime<Utc>>,
    buffer: ConversationBuffer,
    windows: WindowConfig,
    /// Completed user + bot exchanges.
    exchange_count: u32,
}

impl ChatSession {
    /// Start a session with an empty buffer.
    pub fn new(windows: WindowConfig) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            last_active_at: None,
            buffer: ConversationBuffer::new(),
            windows,
            exchange_count: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn windows(&self) -> WindowConfig {
        self.windows
    }

    pub fn buffer(&self) -> &ConversationBuffer {
        &self.buffer
    }

    pub fn exchange_count(&self) -> u32 {
        self.exchange_count
    }

    /// When the session last saw activity, or when it started if nothing
    /// has been said yet.
    pub fn idle_since(&self) -> DateTime<Utc> {
        self.last_active_at.unwrap_or(self.started_at)
    }

    /// Append a user turn.
    pub fn record_user(&mut self, text: impl Into<String>) {
        self.buffer.append(Turn::user(text));
        self.touch();
    }

    /// Append a bot turn and count the exchange as complete.
    pub fn record_bot(&mut self, text: impl Into<String>) {
        self.buffer.append(Turn::bot(text));
        self.exchange_count += 1;
        self.touch();
    }

    /// The turns that feed the next prompt.
    pub fn context(&self) -> &[Turn] {
        self.buffer.context_window(self.windows.context_turns)
    }

    /// The assembled prompt for the current context window.
    pub fn context_prompt(&self) -> String {
        assemble(self.context())
    }

    /// The turns shown to the user.
    pub fn display(&self) -> &[Turn] {
        self.buffer.display_window(self.windows.display_turns)
    }

    /// Display window with presentation labels applied.
    pub fn display_turns(&self, bot_name: &str) -> Vec<DisplayTurn> {
        self.display()
            .iter()
            .map(|turn| DisplayTurn::from_turn(turn, bot_name))
            .collect()
    }

    /// Discard the conversation and start over under the same id.
    pub fn reset(&mut self) {
        self.buffer = ConversationBuffer::new();
        self.exchange_count = 0;
        self.touch();
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            started_at: self.started_at,
            last_active_at: self.last_active_at,
            turn_count: self.buffer.len(),
            exchange_count: self.exchange_count,
            windows: self.windows,
        }
    }

    fn touch(&mut self) {
        self.last_active_at = Some(Utc::now());
    }
}
