//! `learnix ask` -- one interaction cycle on a fresh session.

use anyhow::{Result, bail};
use serde::Serialize;

use learnix_core::chat::session::ChatSession;
use learnix_types::chat::{DisplayTurn, SessionInfo};

use crate::state::AppState;

use super::chat::renderer::{print_display_window, spinner};

/// JSON output of `learnix ask --json`.
#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub reply: String,
    pub session: SessionInfo,
    pub turns: Vec<DisplayTurn>,
}

pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let (session, reply) = exchange(state, message, !json).await?;

    if json {
        let output = AskOutput {
            reply,
            session: session.info(),
            turns: session.display_turns(state.bot_name()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_display_window(&session.display_turns(state.bot_name()));
        tracing::debug!(
            session_id = %session.id(),
            turns = session.buffer().len(),
            "One-shot exchange complete"
        );
    }
    Ok(())
}

/// Run the cycle on a new session, appending `message` exactly as given.
async fn exchange(
    state: &AppState,
    message: &str,
    show_spinner: bool,
) -> Result<(ChatSession, String)> {
    if message.trim().is_empty() {
        bail!("message must not be empty");
    }

    let mut session = ChatSession::new(state.config.windows());

    let progress = show_spinner.then(spinner);
    let result = state.engine.respond(&mut session, message).await;
    if let Some(progress) = progress {
        progress.finish_and_clear();
    }
    let reply = result?;
    Ok((session, reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::echo_state;

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let state = echo_state();
        assert!(exchange(&state, " \t ", false).await.is_err());
    }

    #[tokio::test]
    async fn test_message_kept_verbatim() {
        let state = echo_state();
        let (session, reply) = exchange(&state, " why? ", false).await.unwrap();

        assert_eq!(reply, "User:  why? ");
        assert_eq!(session.buffer().turns()[0].text(), " why? ");
        assert_eq!(session.exchange_count(), 1);
    }
}
