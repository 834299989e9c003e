//! The owner-scoped store contract.
//!
//! Every operation here carries an explicit `owner` argument and is
//! constrained by an equality predicate on the record's owner field, in
//! addition to any id key. The operations are enumerated by hand — there is
//! deliberately no name-to-query derivation layer; what you see is the
//! entire persistence surface.

use async_trait::async_trait;
use cashcard_core::{CashCard, PageRequest, Result};

/// Abstraction over cash card persistence.
///
/// Implementations must uphold two invariants:
///
/// - No operation ever returns or touches a record whose owner differs from
///   the `owner` argument. A foreign record is reported exactly as a
///   missing one.
/// - Ids are assigned by the store on [`save_new`](CardStore::save_new) and
///   are unique for the lifetime of the store; callers never invent ids.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Look up a card by id, scoped to the given owner.
    ///
    /// Returns `None` both when no card has that id and when the card
    /// belongs to someone else.
    async fn find_by_id_and_owner(&self, id: u64, owner: &str) -> Result<Option<CashCard>>;

    /// Owner-scoped existence check.
    async fn exists_by_id_and_owner(&self, id: u64, owner: &str) -> Result<bool>;

    /// List the owner's cards, sorted and sliced per the page request.
    ///
    /// The sort and the page window apply within the owner's record set
    /// only; other owners' records never influence the result.
    async fn find_by_owner(&self, owner: &str, page: &PageRequest) -> Result<Vec<CashCard>>;

    /// Insert a new card with a store-assigned id and the given owner.
    async fn save_new(&self, amount: f64, owner: &str) -> Result<CashCard>;

    /// Replace the amount of an owned card, leaving id and owner unchanged.
    ///
    /// Returns `false` when the card is absent or owned by someone else;
    /// in that case nothing is modified.
    async fn update_amount(&self, id: u64, owner: &str, amount: f64) -> Result<bool>;

    /// Remove an owned card.
    ///
    /// The ownership check and the removal are atomic with respect to other
    /// store calls: the store never deletes a record it has not just
    /// confirmed belongs to `owner`. Returns `false` when the card is
    /// absent or foreign, leaving the store unchanged.
    async fn delete_by_id_and_owner(&self, id: u64, owner: &str) -> Result<bool>;
}
