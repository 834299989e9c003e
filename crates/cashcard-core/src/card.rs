//! The cash card record and its wire payload.

use serde::{Deserialize, Serialize};

/// A persisted cash card record.
///
/// `owner` is assigned once at creation, from the authenticated principal,
/// and is never serialized in API responses — the card's wire shape is
/// `{ "id": ..., "amount": ... }` only. No operation may change ownership.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CashCard {
    /// Store-assigned identifier, immutable after creation.
    pub id: u64,

    /// Signed monetary amount. No sign or range constraint is enforced.
    pub amount: f64,

    /// The principal that created the card. Never exposed on the wire.
    #[serde(skip)]
    pub owner: String,
}

impl CashCard {
    /// Create a card with the given id, amount, and owner.
    pub fn new(id: u64, amount: f64, owner: impl Into<String>) -> Self {
        Self {
            id,
            amount,
            owner: owner.into(),
        }
    }
}

/// Inbound card payload for create and update requests.
///
/// Clients may send `id` and `owner` fields; both are accepted and ignored.
/// The store assigns ids and the service asserts the caller's identity as
/// owner, so a payload can never plant either value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CardPayload {
    /// Ignored; ids are store-assigned.
    #[serde(default)]
    pub id: Option<u64>,

    /// The requested amount.
    pub amount: f64,

    /// Ignored; ownership always comes from the authenticated principal.
    #[serde(default)]
    pub owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_serializes_without_owner() {
        let card = CashCard::new(99, 123.45, "sarah1");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["id"], 99);
        assert_eq!(json["amount"], 123.45);
        assert!(json.get("owner").is_none());
    }

    #[test]
    fn test_payload_accepts_extraneous_fields() {
        let payload: CardPayload =
            serde_json::from_str(r#"{"id": 42, "amount": 250.0, "owner": "mallory"}"#).unwrap();

        assert_eq!(payload.amount, 250.0);
        // Present in the payload, but nothing downstream reads them.
        assert_eq!(payload.id, Some(42));
        assert_eq!(payload.owner.as_deref(), Some("mallory"));
    }

    #[test]
    fn test_payload_amount_only() {
        let payload: CardPayload = serde_json::from_str(r#"{"amount": -5.0}"#).unwrap();

        assert_eq!(payload.amount, -5.0);
        assert_eq!(payload.id, None);
        assert_eq!(payload.owner, None);
    }

    #[test]
    fn test_payload_rejects_missing_amount() {
        let result: std::result::Result<CardPayload, _> = serde_json::from_str(r#"{"id": 1}"#);
        assert!(result.is_err());
    }
}
