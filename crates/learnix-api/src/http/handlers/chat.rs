//! Interaction cycle over HTTP.
//!
//! POST /api/v1/sessions/{id}/messages records the user's message, generates
//! a reply from the context window, and returns the reply together with the
//! updated display window.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use learnix_types::chat::{DisplayTurn, SessionInfo};

use crate::http::error::AppError;
use crate::http::handlers::parse_uuid;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for sending a message.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Result of one interaction cycle.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub session: SessionInfo,
    pub turns: Vec<DisplayTurn>,
}

/// POST /api/v1/sessions/{id}/messages - Run one interaction cycle.
pub async fn send_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<ChatReply>>, AppError> {
    let start = Instant::now();
    let sid = parse_uuid(&session_id)?;

    if body.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be blank".to_string()));
    }

    let shared = state.sessions.get(&sid)?;
    // Held across generation so cycles on one session never interleave.
    let mut session = shared.lock().await;
    let reply = state.engine.respond(&mut session, &body.message).await?;

    let data = ChatReply {
        reply,
        session: session.info(),
        turns: session.display_turns(state.bot_name()),
    };

    let resp = ApiResponse::timed(data, start)
        .with_link("self", &format!("/api/v1/sessions/{sid}/messages"))
        .with_link("session", &format!("/api/v1/sessions/{sid}"));

    Ok(Json(resp))
}
