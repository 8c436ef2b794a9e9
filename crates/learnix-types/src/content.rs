//! Fixed informational text shown around the conversation.

use serde::Serialize;

pub const TITLE: &str = "Learnix";

pub const SUBTITLE: &str = "Helping students, learners, and job-seekers with stress, \
     time management, career guidance, and more!";

pub const HELP_PROMPT: &str = "How can I help you today?";

/// Areas the bot is pitched at, listed under [`HELP_PROMPT`].
pub const HELP_TOPICS: [&str; 4] = [
    "Academic stress and study tips",
    "Time management techniques",
    "Career advice",
    "Resource management strategies",
];

/// Shown while no question has been asked yet.
pub const IDLE_PROMPT: &str = "Ask me anything! I'm here to help.";

/// Shown while a reply is being generated.
pub const WAITING_MESSAGE: &str = "Thinking... please wait...";

pub const CLOSING_HEADLINE: &str = "Your journey starts here!";

pub const CLOSING_NOTE: &str =
    "Stay curious, stay motivated! The answers you seek are just a question away.";

/// All informational text in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub help_prompt: &'static str,
    pub help_topics: &'static [&'static str],
    pub idle_prompt: &'static str,
    pub waiting_message: &'static str,
    pub closing_headline: &'static str,
    pub closing_note: &'static str,
}

impl PageInfo {
    pub fn get() -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            help_prompt: HELP_PROMPT,
            help_topics: &HELP_TOPICS,
            idle_prompt: IDLE_PROMPT,
            waiting_message: WAITING_MESSAGE,
            closing_headline: CLOSING_HEADLINE,
            closing_note: CLOSING_NOTE,
        }
    }
}
