//! The access-control gate.
//!
//! [`CardOwner`] is an extractor that runs before any card handler body:
//! it authenticates the request's Basic credentials against the credential
//! store and requires the card-owner role. Handlers receive the verified
//! [`Principal`] as an ordinary argument — there is no ambient current-user
//! context to consult anywhere downstream.
//!
//! Failure split per the error taxonomy: missing, malformed, or
//! unverifiable credentials are a 401 (with a `WWW-Authenticate`
//! challenge); a verified principal without the role is a 403. A non-owner
//! never learns whether a record path would have matched anything.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use cashcard_auth::parse_basic_auth;
use cashcard_core::Principal;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// A principal that authenticated and holds the card-owner role.
pub struct CardOwner(pub Principal);

impl FromRequestParts<AppState> for CardOwner {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let (username, password) = parse_basic_auth(header).ok_or(ApiError::Unauthorized)?;

        let principal = state
            .credentials
            .verify(&username, &password)
            .ok_or(ApiError::Unauthorized)?;

        if !principal.is_card_owner() {
            debug!(username = %principal.username, "card-owner role missing");
            return Err(ApiError::Forbidden);
        }

        Ok(CardOwner(principal))
    }
}
