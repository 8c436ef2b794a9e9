//! Session lifecycle HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions               - Start a session
//! - GET    /api/v1/sessions/{id}          - Get session info
//! - GET    /api/v1/sessions/{id}/messages - Get the display window
//! - DELETE /api/v1/sessions/{id}          - End a session

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use learnix_types::chat::{DisplayTurn, SessionInfo};

use crate::http::error::AppError;
use crate::http::handlers::parse_uuid;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for message listing.
#[derive(Debug, Default, Deserialize)]
pub struct MessageListQuery {
    /// Window size; defaults to the configured display window.
    pub limit: Option<usize>,
}

/// POST /api/v1/sessions - Start a new conversation.
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<SessionInfo>>) {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let (id, session) = state.sessions.create();
    let info = session.lock().await.info();

    tracing::info!(session_id = %id, "Session started");

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(info, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{id}"))
        .with_link("messages", &format!("/api/v1/sessions/{id}/messages"));

    (StatusCode::CREATED, Json(resp))
}

/// GET /api/v1/sessions/{id} - Get session info.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<SessionInfo>>, AppError> {
    let start = Instant::now();
    let sid = parse_uuid(&session_id)?;

    let info = state.sessions.get(&sid)?.lock().await.info();

    let resp = ApiResponse::timed(info, start)
        .with_link("self", &format!("/api/v1/sessions/{sid}"))
        .with_link("messages", &format!("/api/v1/sessions/{sid}/messages"));

    Ok(Json(resp))
}

/// GET /api/v1/sessions/{id}/messages - The most recent turns, labelled for display.
pub async fn get_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<ApiResponse<Vec<DisplayTurn>>>, AppError> {
    let start = Instant::now();
    let sid = parse_uuid(&session_id)?;

    let shared = state.sessions.get(&sid)?;
    let session = shared.lock().await;
    let limit = query.limit.unwrap_or(session.windows().display_turns);
    let turns: Vec<DisplayTurn> = session
        .buffer()
        .display_window(limit)
        .iter()
        .map(|turn| DisplayTurn::from_turn(turn, state.bot_name()))
        .collect();

    let resp = ApiResponse::timed(turns, start)
        .with_link("self", &format!("/api/v1/sessions/{sid}/messages"))
        .with_link("session", &format!("/api/v1/sessions/{sid}"));

    Ok(Json(resp))
}

/// DELETE /api/v1/sessions/{id} - End a session and drop its history.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let sid = parse_uuid(&session_id)?;
    state.sessions.remove(&sid)?;

    tracing::info!(session_id = %sid, "Session ended");
    Ok(StatusCode::NO_CONTENT)
}
