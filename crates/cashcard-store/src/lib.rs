//! Cashcard Store — owner-scoped persistence.
//!
//! Defines the [`CardStore`] trait, the hand-written persistence surface of
//! the service, and [`MemoryStore`], its in-memory implementation.
//!
//! # Modules
//!
//! - [`store`]: The owner-scoped store contract
//! - [`memory`]: In-memory implementation

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::CardStore;
