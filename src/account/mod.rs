//! Account Store
//!
//! PostgreSQL-backed account balance records: creation and lookup.
//! Balances are only ever mutated by [`crate::transfer::TransferEngine`].

pub mod models;
pub mod repository;

// Re-export commonly used types
pub use models::{Account, AccountId};
pub use repository::AccountRepository;
