//! In-memory card store.
//!
//! [`MemoryStore`] keeps all records in a `HashMap` behind a single
//! `tokio::sync::RwLock`. Holding the write lock across the ownership check
//! and the mutation gives each operation the read-committed, atomic
//! check-then-act behavior the [`CardStore`] contract requires: a delete
//! racing another delete of the same card simply observes "not found".

use std::collections::HashMap;

use async_trait::async_trait;
use cashcard_core::{CashCard, PageRequest, Result, SortDirection, SortKey};
use tokio::sync::RwLock;
use tracing::debug;

use crate::store::CardStore;

/// Seed records match the demo data set the service ships with; id
/// assignment continues from wherever the highest existing id left off.
const FIRST_ID: u64 = 99;

struct Inner {
    cards: HashMap<u64, CashCard>,
    next_id: u64,
}

/// In-memory implementation of [`CardStore`].
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store. The first assigned id is 99.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                cards: HashMap::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// Create a store pre-populated with the demo data set: three cards
    /// owned by `sarah1` and one owned by `kumar2`.
    pub fn seeded() -> Self {
        let cards = [
            CashCard::new(99, 123.45, "sarah1"),
            CashCard::new(100, 1.00, "sarah1"),
            CashCard::new(101, 150.00, "sarah1"),
            CashCard::new(102, 200.00, "kumar2"),
        ];

        let next_id = cards.iter().map(|c| c.id).max().unwrap_or(FIRST_ID - 1) + 1;
        Self {
            inner: RwLock::new(Inner {
                cards: cards.into_iter().map(|c| (c.id, c)).collect(),
                next_id,
            }),
        }
    }

    /// Number of records currently held, across all owners.
    pub async fn len(&self) -> usize {
        self.inner.read().await.cards.len()
    }

    /// Whether the store holds no records at all.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.cards.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn find_by_id_and_owner(&self, id: u64, owner: &str) -> Result<Option<CashCard>> {
        let inner = self.inner.read().await;
        Ok(inner
            .cards
            .get(&id)
            .filter(|card| card.owner == owner)
            .cloned())
    }

    async fn exists_by_id_and_owner(&self, id: u64, owner: &str) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner
            .cards
            .get(&id)
            .is_some_and(|card| card.owner == owner))
    }

    async fn find_by_owner(&self, owner: &str, page: &PageRequest) -> Result<Vec<CashCard>> {
        let inner = self.inner.read().await;

        let mut owned: Vec<CashCard> = inner
            .cards
            .values()
            .filter(|card| card.owner == owner)
            .cloned()
            .collect();

        // Ties on amount fall back to id so page windows are stable.
        owned.sort_by(|a, b| {
            let ordering = match page.sort.key {
                SortKey::Id => a.id.cmp(&b.id),
                SortKey::Amount => a.amount.total_cmp(&b.amount).then(a.id.cmp(&b.id)),
            };
            match page.sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(owned
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .collect())
    }

    async fn save_new(&self, amount: f64, owner: &str) -> Result<CashCard> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id += 1;

        let card = CashCard::new(id, amount, owner);
        inner.cards.insert(id, card.clone());
        debug!(id, owner, "card created");
        Ok(card)
    }

    async fn update_amount(&self, id: u64, owner: &str, amount: f64) -> Result<bool> {
        let mut inner = self.inner.write().await;

        match inner.cards.get_mut(&id) {
            Some(card) if card.owner == owner => {
                card.amount = amount;
                debug!(id, owner, "card updated");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_id_and_owner(&self, id: u64, owner: &str) -> Result<bool> {
        let mut inner = self.inner.write().await;

        // Check and remove under the same write lock.
        let owned = inner.cards.get(&id).is_some_and(|card| card.owner == owner);
        if owned {
            inner.cards.remove(&id);
            debug!(id, owner, "card deleted");
        }
        Ok(owned)
    }
}
