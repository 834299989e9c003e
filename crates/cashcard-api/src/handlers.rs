//! HTTP handlers for the `/cashcards` resource.
//!
//! Each handler pairs the gate-verified principal with one record-service
//! call. The `CardOwner` extractor appears before any body extractor, so
//! authentication and authorization are settled before a payload is even
//! read.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use cashcard_core::{CardPayload, CashCard, PageRequest};
use serde::Deserialize;

use crate::error::ApiError;
use crate::gate::CardOwner;
use crate::state::AppState;

/// Raw `page`/`size`/`sort` query parameters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

/// GET `/cashcards/{id}` — 200 with the card, or 404.
pub async fn get_card(
    State(state): State<AppState>,
    CardOwner(principal): CardOwner,
    Path(id): Path<u64>,
) -> Result<Json<CashCard>, ApiError> {
    let card = state.service.get(id, &principal).await?;
    Ok(Json(card))
}

/// GET `/cashcards` — 200 with the principal's page of cards.
pub async fn list_cards(
    State(state): State<AppState>,
    CardOwner(principal): CardOwner,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CashCard>>, ApiError> {
    let page = PageRequest::from_params(params.page, params.size, params.sort.as_deref())?;
    let cards = state.service.list(&principal, &page).await?;
    Ok(Json(cards))
}

/// POST `/cashcards` — 201 with a `Location` header for the new card.
pub async fn create_card(
    State(state): State<AppState>,
    CardOwner(principal): CardOwner,
    Json(payload): Json<CardPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let card = state.service.create(&payload, &principal).await?;
    let location = format!("/cashcards/{}", card.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// PUT `/cashcards/{id}` — 204 on success, 404 for absent or foreign cards.
pub async fn update_card(
    State(state): State<AppState>,
    CardOwner(principal): CardOwner,
    Path(id): Path<u64>,
    Json(payload): Json<CardPayload>,
) -> Result<StatusCode, ApiError> {
    state.service.update(id, &payload, &principal).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE `/cashcards/{id}` — 204 on success, 404 for absent or foreign cards.
pub async fn delete_card(
    State(state): State<AppState>,
    CardOwner(principal): CardOwner,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id, &principal).await?;
    Ok(StatusCode::NO_CONTENT)
}
