//! Error types for Cashcard operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all Cashcard crates. Uses `thiserror` for derive macros.
//!
//! The `NotFound` variant deliberately covers both "no record with that id"
//! and "record exists but belongs to another owner". Collapsing the two is
//! an information-hiding policy: a distinguishable response would let an
//! authenticated caller enumerate other owners' record ids.

use thiserror::Error;

/// Errors that can occur in Cashcard operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Record absent, or owned by a different principal. The two cases are
    /// intentionally indistinguishable.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid credentials but insufficient role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Malformed request input (bad sort key, bad pagination, bad payload).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying store failure.
    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create a forbidden error.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a store error.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

/// Result type alias using Cashcard's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("card 99");
        assert_eq!(err.to_string(), "Not found: card 99");

        let err = Error::forbidden("role CARD-OWNER required");
        assert_eq!(err.to_string(), "Forbidden: role CARD-OWNER required");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::unauthorized("x"), Error::Unauthorized(_)));
        assert!(matches!(Error::invalid_input("x"), Error::InvalidInput(_)));
        assert!(matches!(Error::config("x"), Error::Config(_)));
        assert!(matches!(Error::store("x"), Error::Store(_)));
    }
}
