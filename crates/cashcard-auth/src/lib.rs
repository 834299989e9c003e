//! Cashcard Auth — credential store and HTTP Basic authentication.
//!
//! Holds the fixed username → password-hash → role mappings and answers the
//! one question the access-control gate asks: does this username/password
//! pair authenticate, and what role does it hold?
//!
//! # Modules
//!
//! - [`basic`]: `Authorization: Basic` header decoding
//! - [`store`]: The in-memory credential store

pub mod basic;
pub mod store;

pub use basic::parse_basic_auth;
pub use store::CredentialStore;
