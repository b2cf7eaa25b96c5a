//! Transfer Engine
//!
//! Executes a debit/credit pair plus its ledger row as one PostgreSQL
//! transaction:
//!
//! ```text
//! BEGIN
//!   transfer_id already recorded?          -> DuplicateTransfer
//!   SELECT balance ... FOR UPDATE (low id)
//!   SELECT balance ... FOR UPDATE (high id)
//!   source missing?                        -> SourceAccountNotFound
//!   source balance < amount?               -> InsufficientBalance
//!   destination missing?                   -> DestinationAccountNotFound
//!   credit would overflow destination?     -> InvalidInput
//!   UPDATE source, UPDATE destination
//!   INSERT transfers
//! COMMIT
//! ```
//!
//! Any early return drops the `sqlx::Transaction`, which rolls back and hands
//! the connection back to the pool. The whole unit of work, lock waits
//! included, runs under one deadline.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool, Row};
use tokio::time::timeout;

use super::types::{TransferId, TransferRecord, TransferRequest};
use crate::account::AccountId;
use crate::error::{LedgerError, is_unique_violation};
use crate::money::Money;

/// Atomic transfer executor
///
/// Holds no in-process locks: all serialization is done by row locks in the
/// datastore, so any number of engines may share one pool.
#[derive(Clone)]
pub struct TransferEngine {
    pool: PgPool,
    op_timeout: Duration,
}

impl TransferEngine {
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    /// Validate and execute a transfer from primitive inputs
    pub async fn execute_transfer(
        &self,
        source_id: i64,
        destination_id: i64,
        amount: Decimal,
        transfer_id: &str,
    ) -> Result<TransferRecord, LedgerError> {
        let req = TransferRequest::new(source_id, destination_id, amount, transfer_id)?;
        self.execute(&req).await
    }

    /// Execute an already-validated transfer
    pub async fn execute(&self, req: &TransferRequest) -> Result<TransferRecord, LedgerError> {
        let result = match timeout(self.op_timeout, self.run(req)).await {
            Ok(inner) => inner,
            Err(elapsed) => Err(elapsed.into()),
        };

        match &result {
            Ok(record) => tracing::info!(
                transfer_id = %record.transfer_id,
                source = %record.source_account_id,
                destination = %record.destination_account_id,
                amount = %record.amount,
                "Transfer committed"
            ),
            Err(e) => tracing::warn!(
                transfer_id = %req.transfer_id,
                source = %req.source,
                destination = %req.destination,
                amount = %req.amount,
                code = e.code(),
                "Transfer rejected: {}",
                e
            ),
        }
        result
    }

    async fn run(&self, req: &TransferRequest) -> Result<TransferRecord, LedgerError> {
        let mut tx = self.pool.begin().await?;

        // 1. Replayed transfer ids are rejected before any lock is taken
        let seen = sqlx::query_scalar::<_, i64>("SELECT id FROM transfers WHERE transfer_id = $1")
            .bind(req.transfer_id.as_str())
            .fetch_optional(&mut *tx)
            .await?;
        if seen.is_some() {
            return Err(LedgerError::DuplicateTransfer(req.transfer_id.to_string()));
        }

        // 2. Lock both rows, lower id first
        let [first, second] = req.lock_order();
        let first_balance = lock_balance(&mut *tx, first).await?;
        let second_balance = lock_balance(&mut *tx, second).await?;
        let (source_balance, destination_balance) = if first == req.source {
            (first_balance, second_balance)
        } else {
            (second_balance, first_balance)
        };

        // 3. Preconditions, evaluated on locked rows
        let source_balance =
            source_balance.ok_or(LedgerError::SourceAccountNotFound(req.source.get()))?;
        if source_balance < req.amount {
            return Err(LedgerError::InsufficientBalance);
        }
        let destination_balance = destination_balance
            .ok_or(LedgerError::DestinationAccountNotFound(req.destination.get()))?;
        destination_balance.checked_add(req.amount).map_err(|e| {
            LedgerError::invalid(format!(
                "credit to account {} rejected: {}",
                req.destination, e
            ))
        })?;

        // 4. Debit / credit. Rows are locked, so the check above still holds.
        adjust_balance(&mut *tx, req.source, -req.amount.value()).await?;
        adjust_balance(&mut *tx, req.destination, req.amount.value()).await?;

        // 5. Ledger row
        let inserted = sqlx::query(
            "INSERT INTO transfers (transfer_id, source_account_id, destination_account_id, amount)
             VALUES ($1, $2, $3, $4)
             RETURNING created_at",
        )
        .bind(req.transfer_id.as_str())
        .bind(req.source.get())
        .bind(req.destination.get())
        .bind(req.amount.value())
        .fetch_one(&mut *tx)
        .await;

        let created_at: DateTime<Utc> = match inserted {
            Ok(row) => row.try_get("created_at")?,
            // Concurrent delivery of the same id raced past the pre-check
            Err(e) if is_unique_violation(&e) => {
                return Err(LedgerError::DuplicateTransfer(req.transfer_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        // 6. Commit
        tx.commit().await?;

        Ok(TransferRecord {
            transfer_id: req.transfer_id.clone(),
            source_account_id: req.source,
            destination_account_id: req.destination,
            amount: req.amount,
            created_at,
        })
    }

    /// Get a committed transfer by its caller-supplied id
    pub async fn get_transfer(&self, transfer_id: &str) -> Result<TransferRecord, LedgerError> {
        let transfer_id = TransferId::new(transfer_id)?;

        let row = timeout(
            self.op_timeout,
            sqlx::query(
                r#"SELECT source_account_id, destination_account_id, amount, created_at
                   FROM transfers WHERE transfer_id = $1"#,
            )
            .bind(transfer_id.as_str())
            .fetch_optional(&self.pool),
        )
        .await??;

        let row = row.ok_or_else(|| LedgerError::TransferNotFound(transfer_id.to_string()))?;
        row_to_record(transfer_id, &row)
    }
}

/// `SELECT ... FOR UPDATE` on one account row; `None` if the account does not exist
async fn lock_balance(
    conn: &mut PgConnection,
    id: AccountId,
) -> Result<Option<Money>, LedgerError> {
    let balance = sqlx::query_scalar::<_, Decimal>(
        "SELECT balance FROM accounts WHERE id = $1 FOR UPDATE",
    )
    .bind(id.get())
    .fetch_optional(&mut *conn)
    .await?;
    Ok(balance.map(Money::from_stored))
}

async fn adjust_balance(
    conn: &mut PgConnection,
    id: AccountId,
    delta: Decimal,
) -> Result<(), LedgerError> {
    let result = sqlx::query("UPDATE accounts SET balance = balance + $1 WHERE id = $2")
        .bind(delta)
        .bind(id.get())
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() != 1 {
        return Err(LedgerError::StorageFault(format!(
            "balance update for account {} touched {} rows",
            id,
            result.rows_affected()
        )));
    }
    Ok(())
}

fn row_to_record(
    transfer_id: TransferId,
    row: &sqlx::postgres::PgRow,
) -> Result<TransferRecord, LedgerError> {
    let source: i64 = row.try_get("source_account_id")?;
    let destination: i64 = row.try_get("destination_account_id")?;
    let amount: Decimal = row.try_get("amount")?;

    Ok(TransferRecord {
        transfer_id,
        source_account_id: AccountId::new(source)?,
        destination_account_id: AccountId::new(destination)?,
        amount: Money::from_stored(amount),
        created_at: row.try_get("created_at")?,
    })
}
