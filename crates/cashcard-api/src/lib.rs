//! Cashcard API — HTTP server for the cash card record service.
//!
//! Wires the credential store, the access-control gate, the record
//! service, and the card store behind an axum router. Request flow:
//! inbound request → [`gate::CardOwner`] (authenticate + authorize the
//! card-owner role) → [`service::CardService`] (scope the operation to the
//! verified principal) → store → response.
//!
//! # Modules
//!
//! - [`cli`]: CLI argument parsing
//! - [`config`]: Server configuration
//! - [`error`]: HTTP error mapping
//! - [`gate`]: The access-control gate
//! - [`handlers`]: HTTP handlers for `/cashcards`
//! - [`service`]: The ownership-scoped record service
//! - [`state`]: Shared application state

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod service;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub use config::CashcardConfig;
pub use error::ApiError;
pub use service::CardService;
pub use state::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/cashcards",
            get(handlers::list_cards).post(handlers::create_card),
        )
        .route(
            "/cashcards/{id}",
            get(handlers::get_card)
                .put(handlers::update_card)
                .delete(handlers::delete_card),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
