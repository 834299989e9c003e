//! Authenticated principals and roles.
//!
//! A [`Principal`] is the verified identity of the caller, derived from
//! credentials by the credential store — never from a request payload.
//! Every service call takes the principal as an explicit argument; there is
//! no ambient "current user" lookup anywhere in the codebase.

use serde::{Deserialize, Serialize};

/// Role held by an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// May access card endpoints, scoped to records they own.
    CardOwner,
    /// Authenticated but barred from every card endpoint.
    NonOwner,
}

impl Role {
    /// Canonical role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CardOwner => "CARD-OWNER",
            Role::NonOwner => "NON-OWNER",
        }
    }
}

/// The verified identity of an authenticated caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    /// The authenticated username. Owner-scoped store operations filter
    /// on this value.
    pub username: String,

    /// The role the credential store holds for this user.
    pub role: Role,
}

impl Principal {
    /// Create a principal with the given username and role.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Whether this principal may reach the card endpoints at all.
    pub fn is_card_owner(&self) -> bool {
        self.role == Role::CardOwner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(Role::CardOwner.as_str(), "CARD-OWNER");
        assert_eq!(Role::NonOwner.as_str(), "NON-OWNER");
    }

    #[test]
    fn test_card_owner_check() {
        assert!(Principal::new("sarah1", Role::CardOwner).is_card_owner());
        assert!(!Principal::new("hank-owns-no-cards", Role::NonOwner).is_card_owner());
    }
}
