//! Conversation turn and session types for Learnix.
//!
//! A conversation is an ordered log of [`Turn`]s, each tagged with the
//! [`Speaker`] that produced it. Sessions expose a read-only [`SessionInfo`]
//! snapshot and render turns for display as [`DisplayTurn`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Default number of most recent turns fed to the model as context.
pub const DEFAULT_CONTEXT_TURNS: usize = 3;

/// Default number of most recent turns shown to the user.
pub const DEFAULT_DISPLAY_TURNS: usize = 6;

/// Label shown for user turns in the display window.
pub const USER_DISPLAY_LABEL: &str = "You";

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Label used when a turn is rendered into a prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Bot => "Bot",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt_label())
    }
}

impl FromStr for Speaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Speaker::User),
            "bot" => Ok(Speaker::Bot),
            other => Err(format!("invalid speaker: '{other}'")),
        }
    }
}

/// One labeled utterance in a conversation.
///
/// Turns are immutable once created: the fields are private and only
/// readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    /// A turn spoken by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    /// A turn produced by the bot.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, text)
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Sizes of the two read-time views over a conversation.
///
/// The context window bounds what is sent to the model; the display window
/// bounds what is shown to the user. Both count raw turns, not exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub context_turns: usize,
    pub display_turns: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            context_turns: DEFAULT_CONTEXT_TURNS,
            display_turns: DEFAULT_DISPLAY_TURNS,
        }
    }
}

/// A turn prepared for presentation, carrying its human-facing label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTurn {
    pub speaker: Speaker,
    /// `"You"` for the user, the bot's display name otherwise.
    pub label: String,
    pub text: String,
}

impl DisplayTurn {
    pub fn from_turn(turn: &Turn, bot_name: &str) -> Self {
        let label = match turn.speaker() {
            Speaker::User => USER_DISPLAY_LABEL.to_string(),
            Speaker::Bot => bot_name.to_string(),
        };
        Self {
            speaker: turn.speaker(),
            label,
            text: turn.text().to_string(),
        }
    }
}

/// Read-only snapshot of a chat session's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
    /// Number of turns in the conversation buffer.
    pub turn_count: usize,
    /// Number of completed user + bot exchanges.
    pub exchange_count: u32,
    pub windows: WindowConfig,
}
