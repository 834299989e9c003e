//! The record service.
//!
//! [`CardService`] is the only place where requests touch the store, and
//! every method takes the verified [`Principal`] as an explicit argument —
//! the service scopes each operation to that principal's identity before
//! the store ever sees it.
//!
//! An absent record and another owner's record produce the same
//! [`Error::NotFound`]: distinguishing them would let an authenticated
//! caller enumerate other owners' ids.

use std::sync::Arc;

use cashcard_core::{CardPayload, CashCard, Error, PageRequest, Principal, Result};
use cashcard_store::CardStore;
use tracing::info;

/// Ownership-scoped card operations over a [`CardStore`].
#[derive(Clone)]
pub struct CardService {
    store: Arc<dyn CardStore>,
}

impl CardService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    /// Fetch one card owned by the principal.
    pub async fn get(&self, id: u64, principal: &Principal) -> Result<CashCard> {
        self.store
            .find_by_id_and_owner(id, &principal.username)
            .await?
            .ok_or_else(|| Error::not_found(format!("card {id}")))
    }

    /// List the principal's cards, sorted and paged within their own set.
    pub async fn list(&self, principal: &Principal, page: &PageRequest) -> Result<Vec<CashCard>> {
        self.store.find_by_owner(&principal.username, page).await
    }

    /// Create a card owned by the principal.
    ///
    /// Only the payload's amount is read. Any id or owner a client smuggles
    /// into the payload is discarded: ids are store-assigned and ownership
    /// always comes from the authenticated principal.
    pub async fn create(&self, payload: &CardPayload, principal: &Principal) -> Result<CashCard> {
        let card = self
            .store
            .save_new(payload.amount, &principal.username)
            .await?;
        info!(id = card.id, owner = %principal.username, "card created");
        Ok(card)
    }

    /// Replace the amount of a card owned by the principal.
    ///
    /// The payload's owner field (if any) is ignored; the caller's identity
    /// is re-asserted here, so an update can never reassign ownership.
    pub async fn update(
        &self,
        id: u64,
        payload: &CardPayload,
        principal: &Principal,
    ) -> Result<()> {
        let updated = self
            .store
            .update_amount(id, &principal.username, payload.amount)
            .await?;
        if updated {
            Ok(())
        } else {
            Err(Error::not_found(format!("card {id}")))
        }
    }

    /// Delete a card owned by the principal.
    ///
    /// The store performs the ownership check and the removal atomically;
    /// a card that is absent or foreign yields not-found and no change.
    pub async fn delete(&self, id: u64, principal: &Principal) -> Result<()> {
        let deleted = self
            .store
            .delete_by_id_and_owner(id, &principal.username)
            .await?;
        if deleted {
            info!(id, owner = %principal.username, "card deleted");
            Ok(())
        } else {
            Err(Error::not_found(format!("card {id}")))
        }
    }
}
