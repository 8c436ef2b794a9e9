//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and never reach the model.

use console::style;

use learnix_types::advice::AdviceTopic;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Show the display window again.
    History,
    /// Show canned advice; `None` lists the topics.
    Advice(Option<AdviceTopic>),
    /// Start the conversation over.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Unknown command or bad argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/history" => Some(ChatCommand::History),
        "/advice" => match arg {
            None => Some(ChatCommand::Advice(None)),
            Some(topic) => match topic.parse::<AdviceTopic>() {
                Ok(topic) => Some(ChatCommand::Advice(Some(topic))),
                Err(e) => Some(ChatCommand::Unknown(e)),
            },
        },
        "/clear" | "/new" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}            Show this help message", style("/help").cyan());
    println!("  {}         Show recent conversation", style("/history").cyan());
    println!("  {} Show advice (time-management, career-guidance)", style("/advice <topic>").cyan());
    println!("  {}           Start the conversation over", style("/clear").cyan());
    println!("  {}            End the chat session", style("/exit").cyan());
    println!();
    println!(
        "  {}",
        style("Ctrl+D to exit, Ctrl+C safe (no message loss)").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("  /Q  "), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_advice() {
        assert_eq!(parse("/advice"), Some(ChatCommand::Advice(None)));
        assert_eq!(
            parse("/advice time-management"),
            Some(ChatCommand::Advice(Some(AdviceTopic::TimeManagement)))
        );
        assert_eq!(
            parse("/advice career"),
            Some(ChatCommand::Advice(Some(AdviceTopic::CareerGuidance)))
        );
    }

    #[test]
    fn test_parse_advice_unknown_topic() {
        match parse("/advice cooking") {
            Some(ChatCommand::Unknown(msg)) => assert!(msg.contains("cooking")),
            other => panic!("Expected Unknown, got: {other:?}"),
        }
    }

    #[test]
    fn test_parse_clear_and_history() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/new"), Some(ChatCommand::Clear));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_plain_text_is_not_command() {
        assert_eq!(parse("how do I study better?"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("/dance"),
            Some(ChatCommand::Unknown("/dance".to_string()))
        );
    }
}
