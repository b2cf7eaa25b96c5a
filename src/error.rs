//! Ledger Error Types
//!
//! Failure taxonomy shared by the account store and the transfer engine.
//! Transport mapping (HTTP status, envelope codes) lives in the gateway.

use thiserror::Error;

use crate::money::MoneyError;

/// Ledger error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // === Validation Errors ===
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // === Account Errors ===
    #[error("Account {0} already exists")]
    DuplicateAccount(i64),

    #[error("Account {0} not found")]
    NotFound(i64),

    #[error("Source account {0} not found")]
    SourceAccountNotFound(i64),

    #[error("Destination account {0} not found")]
    DestinationAccountNotFound(i64),

    #[error("Insufficient balance")]
    InsufficientBalance,

    // === Transfer Errors ===
    #[error("Transfer {0} already exists")]
    DuplicateTransfer(String),

    #[error("Transfer {0} not found")]
    TransferNotFound(String),

    // === System Errors ===
    #[error("Operation timed out")]
    Timeout,

    #[error("Storage error: {0}")]
    StorageFault(String),
}

impl LedgerError {
    /// Stable machine-readable code for this failure kind
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidInput(_) => "INVALID_INPUT",
            LedgerError::DuplicateAccount(_) => "DUPLICATE_ACCOUNT",
            LedgerError::NotFound(_) => "ACCOUNT_NOT_FOUND",
            LedgerError::SourceAccountNotFound(_) => "SOURCE_ACCOUNT_NOT_FOUND",
            LedgerError::DestinationAccountNotFound(_) => "DESTINATION_ACCOUNT_NOT_FOUND",
            LedgerError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            LedgerError::DuplicateTransfer(_) => "DUPLICATE_TRANSFER",
            LedgerError::TransferNotFound(_) => "TRANSFER_NOT_FOUND",
            LedgerError::Timeout => "TIMEOUT",
            LedgerError::StorageFault(_) => "STORAGE_FAULT",
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LedgerError::InvalidInput(msg.into())
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut => LedgerError::Timeout,
            other => LedgerError::StorageFault(other.to_string()),
        }
    }
}

impl From<MoneyError> for LedgerError {
    fn from(e: MoneyError) -> Self {
        LedgerError::InvalidInput(e.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for LedgerError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        LedgerError::Timeout
    }
}

/// True when the datastore rejected a write on a UNIQUE / PRIMARY KEY constraint
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InsufficientBalance.code(), "INSUFFICIENT_BALANCE");
        assert_eq!(LedgerError::NotFound(7).code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(
            LedgerError::DestinationAccountNotFound(99).code(),
            "DESTINATION_ACCOUNT_NOT_FOUND"
        );
        assert_eq!(LedgerError::Timeout.code(), "TIMEOUT");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LedgerError::SourceAccountNotFound(3).to_string(),
            "Source account 3 not found"
        );
        assert_eq!(
            LedgerError::DuplicateTransfer("tx-1".into()).to_string(),
            "Transfer tx-1 already exists"
        );
    }

    #[test]
    fn test_pool_timeout_maps_to_timeout() {
        assert_eq!(LedgerError::from(sqlx::Error::PoolTimedOut), LedgerError::Timeout);
    }

    #[test]
    fn test_other_sqlx_errors_are_storage_faults() {
        let err = LedgerError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, LedgerError::StorageFault(_)));
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn test_money_error_is_invalid_input() {
        let err = LedgerError::from(MoneyError::NotPositive);
        assert_eq!(err.code(), "INVALID_INPUT");
    }
}
