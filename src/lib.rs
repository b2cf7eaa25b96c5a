//! Internal Transfers - Account Ledger with Atomic Transfers
//!
//! Accounts hold a non-negative balance; a transfer moves an exact decimal
//! amount between two accounts as one all-or-nothing PostgreSQL transaction.
//!
//! # Modules
//!
//! - [`money`] - Exact 2-dp decimal amounts
//! - [`error`] - Failure taxonomy shared by every component
//! - [`account`] - Account ids, records, and the account store
//! - [`transfer`] - Transfer requests, lock ordering, and the transfer engine
//! - [`db`] - Connection pool and schema
//! - [`config`] - YAML + environment configuration
//! - [`logging`] - tracing subscriber setup
//! - [`gateway`] - axum HTTP gateway with OpenAPI docs

pub mod config;
pub mod logging;

// Ledger core
pub mod account;
pub mod error;
pub mod money;
pub mod transfer;

// Storage
pub mod db;

// HTTP
pub mod gateway;

// Convenient re-exports at crate root
pub use account::{Account, AccountId, AccountRepository};
pub use db::Database;
pub use error::LedgerError;
pub use money::{Money, MoneyError};
pub use transfer::{TransferEngine, TransferId, TransferRecord, TransferRequest};
