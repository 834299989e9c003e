//! HTTP error mapping.
//!
//! Translates the domain error taxonomy into response statuses:
//! authentication failures → 401, authorization failures → 403,
//! ownership-scope misses → 404, malformed input → 400. The 404 body is
//! always empty, so "no such record" and "someone else's record" produce
//! byte-identical responses.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use cashcard_core::Error;
use serde::Serialize;
use tracing::error;

/// An error response for a card endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or invalid credentials.
    Unauthorized,
    /// Authenticated, but not a card owner.
    Forbidden,
    /// Record absent or owned by another principal.
    NotFound,
    /// Malformed query or payload.
    BadRequest(String),
    /// Unexpected store failure.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"cashcards\"")],
            )
                .into_response(),
            ApiError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
            ApiError::Internal(message) => {
                // The detail stays in the log; clients get a bare 500.
                error!(%message, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(_) => ApiError::NotFound,
            Error::Unauthorized(_) => ApiError::Unauthorized,
            Error::Forbidden(_) => ApiError::Forbidden,
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::Config(msg) | Error::Store(msg) => ApiError::Internal(msg),
        }
    }
}
