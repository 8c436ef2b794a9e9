//! HTTP request handlers for the REST API.

pub mod advice;
pub mod chat;
pub mod info;
pub mod session;

use uuid::Uuid;

use learnix_types::error::SessionError;

use crate::http::error::AppError;

/// Parse a session id from a path parameter, returning a 400 error on invalid format.
pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    s.parse::<Uuid>()
        .map_err(|_| AppError::Session(SessionError::InvalidId(s.to_string())))
}
