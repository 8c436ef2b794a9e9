//! Fixed advice topics.
//!
//! Endpoints:
//! - GET /api/v1/advice         - All topics with their advice text
//! - GET /api/v1/advice/{topic} - One topic (`time-management`, `career-guidance`)

use std::time::Instant;

use axum::extract::Path;
use axum::Json;

use learnix_types::advice::{Advice, AdviceTopic};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;

/// GET /api/v1/advice - List every advice topic.
pub async fn list_advice() -> Json<ApiResponse<Vec<Advice>>> {
    let start = Instant::now();
    let topics: Vec<Advice> = AdviceTopic::ALL.into_iter().map(Advice::from).collect();
    Json(ApiResponse::timed(topics, start).with_link("self", "/api/v1/advice"))
}

/// GET /api/v1/advice/{topic} - Advice for a single topic.
pub async fn get_advice(Path(topic): Path<String>) -> Result<Json<ApiResponse<Advice>>, AppError> {
    let start = Instant::now();
    let topic: AdviceTopic = topic.parse().map_err(AppError::AdviceNotFound)?;

    let resp = ApiResponse::timed(Advice::from(topic), start)
        .with_link("self", &format!("/api/v1/advice/{topic}"))
        .with_link("all", "/api/v1/advice");

    Ok(Json(resp))
}
