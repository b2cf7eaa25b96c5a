//! Transaction request/response DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::LedgerError;
use crate::transfer::TransferRecord;

use super::parse_client_amount;

/// POST /transactions body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    #[schema(example = 123)]
    pub source_account_id: i64,
    #[schema(example = 456)]
    pub destination_account_id: i64,
    /// Client idempotency key; a replay is rejected with 409
    #[schema(example = "6f1c2b0e-7d7a-4f43-9b8e-2f7d0c1a9e55")]
    pub transaction_id: String,
    /// Amount as a decimal string; digits past 2 dp are truncated
    #[schema(example = "100.12345")]
    pub amount: String,
}

impl CreateTransactionRequest {
    pub fn amount(&self) -> Result<Decimal, LedgerError> {
        parse_client_amount("amount", &self.amount)
    }
}

/// Committed transaction response data
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionResponse {
    pub transaction_id: String,
    pub source_account_id: i64,
    pub destination_account_id: i64,
    #[schema(example = "100.12")]
    pub amount: String,
    pub created_at: DateTime<Utc>,
}

impl From<TransferRecord> for TransactionResponse {
    fn from(record: TransferRecord) -> Self {
        Self {
            transaction_id: record.transfer_id.to_string(),
            source_account_id: record.source_account_id.get(),
            destination_account_id: record.destination_account_id.get(),
            amount: record.amount.to_string(),
            created_at: record.created_at,
        }
    }
}
