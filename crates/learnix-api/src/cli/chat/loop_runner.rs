//! Main chat loop orchestration.
//!
//! Owns one `ChatSession` for the lifetime of the loop. Each submitted line
//! is either a slash command or a full interaction cycle; the next line is
//! not read until the cycle has finished.

use console::style;
use rustyline_async::{Readline, ReadlineEvent};
use tracing::{info, warn};

use learnix_core::chat::session::ChatSession;

use crate::cli::advice::{print_advice, print_topics};
use crate::state::AppState;

use super::banner::{print_closing, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::renderer::{print_display_window, print_generation_error, spinner};

/// Run the interactive chat loop until the user exits.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let bot_name = state.bot_name().to_string();
    let mut session = ChatSession::new(state.config.windows());
    let session_id = session.id().to_string();

    print_welcome_banner(
        &bot_name,
        state.engine.generator_name(),
        &state.config.provider.model,
        &session_id,
    );

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut rl, _writer) = Readline::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => line,
            Ok(ReadlineEvent::Interrupted) => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            Ok(ReadlineEvent::Eof) => break,
            Err(e) => {
                warn!(error = %e, "Input closed");
                break;
            }
        };

        // Blank input never reaches the model; anything else is sent as typed.
        if text.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(text.clone());

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::History => {
                    if session.buffer().is_empty() {
                        println!("\n  {}\n", style("No messages yet.").dim());
                    } else {
                        print_display_window(&session.display_turns(&bot_name));
                    }
                }
                ChatCommand::Advice(Some(topic)) => print_advice(topic),
                ChatCommand::Advice(None) => print_topics(),
                ChatCommand::Clear => {
                    session.reset();
                    let _ = rl.clear();
                    println!("\n  {}\n", style("Conversation cleared.").dim());
                }
                ChatCommand::Exit => break,
                ChatCommand::Unknown(detail) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(detail).dim()
                    );
                }
            }
            continue;
        }

        let progress = spinner();
        let result = state.engine.respond(&mut session, &text).await;
        progress.finish_and_clear();

        match result {
            Ok(_) => print_display_window(&session.display_turns(&bot_name)),
            Err(e) => print_generation_error(&e),
        }
    }

    info!(
        session_id = %session_id,
        exchanges = session.exchange_count(),
        turns = session.buffer().len(),
        "Chat session ended"
    );
    println!("\n  {}", style("Session ended.").dim());
    print_closing();
    Ok(())
}
