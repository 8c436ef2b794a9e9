//! Static advice topics offered next to the conversation.
//!
//! Advice is fixed text: it never touches the conversation buffer or the
//! model backend.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A topic the user can ask canned advice for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdviceTopic {
    TimeManagement,
    CareerGuidance,
}

impl AdviceTopic {
    /// Every topic, in the order they are offered.
    pub const ALL: [AdviceTopic; 2] = [AdviceTopic::TimeManagement, AdviceTopic::CareerGuidance];

    /// Button/command label for the topic.
    pub fn label(&self) -> &'static str {
        match self {
            AdviceTopic::TimeManagement => "Need advice on Time Management?",
            AdviceTopic::CareerGuidance => "Need Career Guidance?",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            AdviceTopic::TimeManagement => {
                "Time management is all about prioritizing tasks and staying organized. \
                 Break your work into manageable chunks, set specific goals, and use a timer \
                 to track your progress."
            }
            AdviceTopic::CareerGuidance => {
                "A great career starts with understanding your skills, passions, and goals. \
                 Focus on networking, learning, and continuously improving your skillset."
            }
        }
    }
}

impl fmt::Display for AdviceTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdviceTopic::TimeManagement => write!(f, "time-management"),
            AdviceTopic::CareerGuidance => write!(f, "career-guidance"),
        }
    }
}

impl FromStr for AdviceTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "time-management" | "time" => Ok(AdviceTopic::TimeManagement),
            "career-guidance" | "career" => Ok(AdviceTopic::CareerGuidance),
            other => Err(format!("unknown advice topic: '{other}'")),
        }
    }
}

/// An advice topic with its rendered label and text, as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advice {
    pub topic: AdviceTopic,
    pub label: String,
    pub text: String,
}

impl From<AdviceTopic> for Advice {
    fn from(topic: AdviceTopic) -> Self {
        Self {
            topic,
            label: topic.label().to_string(),
            text: topic.advice().to_string(),
        }
    }
}
