//! Transfer Core Types

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::AccountId;
use crate::error::LedgerError;
use crate::money::Money;

/// Column width of `transfers.transfer_id`, in characters
pub const MAX_TRANSFER_ID_LEN: usize = 255;

/// Caller-supplied transfer identifier (idempotency key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransferId(String);

impl TransferId {
    pub fn new(id: impl Into<String>) -> Result<Self, LedgerError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(LedgerError::invalid("transfer id cannot be empty"));
        }
        if id.chars().count() > MAX_TRANSFER_ID_LEN {
            return Err(LedgerError::invalid(format!(
                "transfer id exceeds {} characters",
                MAX_TRANSFER_ID_LEN
            )));
        }
        // PostgreSQL text cannot hold NUL
        if id.contains('\0') {
            return Err(LedgerError::invalid("transfer id cannot contain NUL"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated transfer request
///
/// Construction is the only way to get one, so the engine never sees a
/// self-transfer, a non-positive id, or an amount off the 2-dp grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub transfer_id: TransferId,
    pub source: AccountId,
    pub destination: AccountId,
    pub amount: Money,
}

impl TransferRequest {
    pub fn new(
        source: i64,
        destination: i64,
        amount: Decimal,
        transfer_id: &str,
    ) -> Result<Self, LedgerError> {
        let source = AccountId::new(source)?;
        let destination = AccountId::new(destination)?;
        if source == destination {
            return Err(LedgerError::invalid(format!(
                "source and destination account cannot be the same ({})",
                source
            )));
        }
        let amount = Money::positive(amount)?;
        let transfer_id = TransferId::new(transfer_id)?;

        Ok(Self {
            transfer_id,
            source,
            destination,
            amount,
        })
    }

    /// Row-lock acquisition order for this pair
    pub fn lock_order(&self) -> [AccountId; 2] {
        lock_order(self.source, self.destination)
    }
}

/// Fixed total order over account ids: lower id is locked first.
///
/// Two transfers moving funds in opposite directions between the same pair
/// therefore request the locks in the same sequence and cannot deadlock.
pub fn lock_order(a: AccountId, b: AccountId) -> [AccountId; 2] {
    if a <= b { [a, b] } else { [b, a] }
}

/// Committed transfer (immutable ledger row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRecord {
    pub transfer_id: TransferId,
    pub source_account_id: AccountId,
    pub destination_account_id: AccountId,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn id(n: i64) -> AccountId {
        AccountId::new(n).unwrap()
    }

    #[test]
    fn test_request_valid() {
        let req = TransferRequest::new(1, 2, dec!(30.00), "tx-1").unwrap();
        assert_eq!(req.source, id(1));
        assert_eq!(req.destination, id(2));
        assert_eq!(req.amount.to_string(), "30.00");
        assert_eq!(req.transfer_id.as_str(), "tx-1");
    }

    #[test]
    fn test_same_account_rejected() {
        let err = TransferRequest::new(5, 5, dec!(1.00), "tx").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
    }

    #[test]
    fn test_non_positive_ids_rejected() {
        assert!(TransferRequest::new(0, 2, dec!(1), "tx").is_err());
        assert!(TransferRequest::new(1, -2, dec!(1), "tx").is_err());
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        for amount in [dec!(0), dec!(-10.00), dec!(0.001)] {
            let err = TransferRequest::new(1, 2, amount, "tx").unwrap_err();
            assert_eq!(err.code(), "INVALID_INPUT", "amount {} should be rejected", amount);
        }
    }

    #[test]
    fn test_transfer_id_bounds() {
        assert!(TransferId::new("").is_err());
        assert!(TransferId::new("   ").is_err());
        assert!(TransferId::new("x".repeat(MAX_TRANSFER_ID_LEN)).is_ok());
        assert!(TransferId::new("x".repeat(MAX_TRANSFER_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_transfer_id_length_counts_characters() {
        // 255 two-byte characters fit VARCHAR(255)
        let wide = "é".repeat(MAX_TRANSFER_ID_LEN);
        assert!(wide.len() > MAX_TRANSFER_ID_LEN);
        assert!(TransferId::new(wide).is_ok());
        assert!(TransferId::new("é".repeat(MAX_TRANSFER_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_transfer_id_rejects_nul() {
        let err = TransferId::new("tx\0id").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
    }

    #[test]
    fn test_lock_order_is_role_independent() {
        let forward = TransferRequest::new(7, 3, dec!(1), "a").unwrap();
        let backward = TransferRequest::new(3, 7, dec!(1), "b").unwrap();
        assert_eq!(forward.lock_order(), [id(3), id(7)]);
        assert_eq!(forward.lock_order(), backward.lock_order());
    }
}
