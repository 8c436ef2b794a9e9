//! HTTP/REST API layer for Learnix.
//!
//! Axum-based REST API at `/api/v1/` with envelope response format, CORS
//! support, and a single HTML chat page at `/`.

pub mod error;
pub mod handlers;
pub mod page;
pub mod response;
pub mod router;
