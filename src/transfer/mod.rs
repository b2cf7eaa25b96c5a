//! Transfer Engine
//!
//! Moves funds between two accounts as one indivisible PostgreSQL unit of work.
//!
//! # Safety Invariants
//!
//! 1. **Lock Before Read**: both account rows are read with `FOR UPDATE`, so a
//!    concurrent transfer can never act on a stale balance (no lost updates)
//! 2. **Fixed Lock Order**: rows are locked by ascending account id regardless
//!    of which side is source or destination (no opposite-direction deadlock)
//! 3. **All Or Nothing**: debit, credit and ledger row commit together or not at all
//! 4. **Idempotency**: a `transfer_id` is applied at most once (`DuplicateTransfer`)
//! 5. **Conservation**: the sum of all balances is unchanged by every transfer

pub mod engine;
pub mod types;

#[cfg(test)]
mod integration_tests;

// Re-exports for convenience
pub use engine::TransferEngine;
pub use types::{TransferId, TransferRecord, TransferRequest, lock_order};
