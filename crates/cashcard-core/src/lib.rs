//! Cashcard Core — shared types and errors.
//!
//! This crate provides the foundational types used across all Cashcard
//! crates. It has no internal Cashcard dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`card`]: The cash card record and its wire payload
//! - [`principal`]: Authenticated principals and roles
//! - [`page`]: Pagination and sorting request types

pub mod card;
pub mod error;
pub mod page;
pub mod principal;

// Re-export key types at crate root for convenience
pub use card::{CardPayload, CashCard};
pub use error::{Error, Result};
pub use page::{PageRequest, Sort, SortDirection, SortKey};
pub use principal::{Principal, Role};
