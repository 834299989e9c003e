//! The in-memory credential store.
//!
//! A small fixed set of users, each with a bcrypt password hash and a role.
//! Verification answers with a [`Principal`] or nothing — an unknown
//! username and a wrong password are indistinguishable to the caller.

use std::collections::HashMap;

use bcrypt::DEFAULT_COST;
use cashcard_core::{Error, Principal, Result, Role};
use tracing::warn;

// Demo credentials are published fixtures, not secrets; the low cost keeps
// startup and test time down. Real users go through `add_user`.
const DEMO_COST: u32 = 4;

struct UserEntry {
    password_hash: String,
    role: Role,
}

/// In-memory username → password-hash → role store.
pub struct CredentialStore {
    users: HashMap<String, UserEntry>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Create a store holding the demo users: `sarah1` and `kumar2` as card
    /// owners, `hank-owns-no-cards` authenticated but without the role.
    pub fn with_demo_users() -> Result<Self> {
        let mut store = Self::new();
        store.add_user_with_cost("sarah1", "abc123", Role::CardOwner, DEMO_COST)?;
        store.add_user_with_cost("kumar2", "xyz789", Role::CardOwner, DEMO_COST)?;
        store.add_user_with_cost("hank-owns-no-cards", "qrs456", Role::NonOwner, DEMO_COST)?;
        Ok(store)
    }

    /// Hash the password and register the user, replacing any existing
    /// entry for the same username.
    pub fn add_user(&mut self, username: &str, password: &str, role: Role) -> Result<()> {
        self.add_user_with_cost(username, password, role, DEFAULT_COST)
    }

    fn add_user_with_cost(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
        cost: u32,
    ) -> Result<()> {
        let password_hash = bcrypt::hash(password, cost)
            .map_err(|e| Error::config(format!("failed to hash password: {e}")))?;

        self.users.insert(
            username.to_string(),
            UserEntry {
                password_hash,
                role,
            },
        );
        Ok(())
    }

    /// Verify a username/password pair.
    ///
    /// Returns the verified [`Principal`] on success. Unknown usernames and
    /// wrong passwords both yield `None`.
    pub fn verify(&self, username: &str, password: &str) -> Option<Principal> {
        let entry = self.users.get(username)?;

        match bcrypt::verify(password, &entry.password_hash) {
            Ok(true) => Some(Principal::new(username, entry.role)),
            Ok(false) => None,
            Err(e) => {
                warn!(username, error = %e, "password verification failed");
                None
            }
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
