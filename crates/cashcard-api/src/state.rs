//! Shared application state.

use std::sync::Arc;

use cashcard_auth::CredentialStore;
use cashcard_store::CardStore;

use crate::service::CardService;

/// State shared by every request handler.
///
/// Cloning is cheap (Arc clones); multiple handlers share the same store
/// and credential set concurrently.
#[derive(Clone)]
pub struct AppState {
    /// The ownership-scoped record service.
    pub service: CardService,

    /// Credential store consulted by the access-control gate.
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    /// Build state over the given store and credentials.
    pub fn new(store: Arc<dyn CardStore>, credentials: Arc<CredentialStore>) -> Self {
        Self {
            service: CardService::new(store),
            credentials,
        }
    }
}
