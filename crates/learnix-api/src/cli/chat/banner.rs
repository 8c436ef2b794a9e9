//! Welcome and closing text for terminal chat sessions.

use console::style;

use learnix_types::content::{
    CLOSING_HEADLINE, CLOSING_NOTE, HELP_PROMPT, HELP_TOPICS, IDLE_PROMPT, SUBTITLE, TITLE,
};

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(bot_name: &str, backend: &str, model: &str, session_id: &str) {
    println!();
    println!("  {}", style(TITLE).cyan().bold());
    println!("  {}", style(SUBTITLE).dim());
    println!();
    println!("  {}", style(HELP_PROMPT).bold());
    for topic in HELP_TOPICS {
        println!("    - {topic}");
    }
    println!();
    println!("  {}    {}", style("Bot:").bold(), style(bot_name).dim());
    println!("  {}  {} ({})", style("Model:").bold(), style(model).dim(), backend);
    println!(
        "  {} {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!("  {}", style(IDLE_PROMPT).italic());
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

pub fn print_closing() {
    println!();
    println!("  {}", style(CLOSING_HEADLINE).cyan().bold());
    println!("  {}", style(CLOSING_NOTE).dim());
    println!();
}
