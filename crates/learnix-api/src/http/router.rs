//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/v1/`. The chat page is served at `/`.
//! Middleware: CORS, tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::{handlers, page};
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/info", get(handlers::info::get_info))
        // Sessions
        .route("/sessions", post(handlers::session::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::session::get_session).delete(handlers::session::delete_session),
        )
        .route(
            "/sessions/{id}/messages",
            get(handlers::session::get_messages).post(handlers::chat::send_message),
        )
        // Advice
        .route("/advice", get(handlers::advice::list_advice))
        .route("/advice/{topic}", get(handlers::advice::get_advice));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/", get(page::index))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let axum::Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn test_router_builds() {
        let _router = build_router(crate::state::test_support::echo_state());
    }

    #[tokio::test]
    async fn test_index_page_served() {
        let axum::response::Html(body) = page::index().await;
        assert!(body.contains("/api/v1/info"));
        // Closing the page ends its session.
        assert!(body.contains("\"pagehide\""));
        assert!(body.contains("method: \"DELETE\", keepalive: true"));
    }
}
