//! Repository layer for account records

use std::time::Duration;

use rust_decimal::Decimal;
use sqlx::PgPool;
use tokio::time::timeout;

use super::models::{Account, AccountId};
use crate::error::{LedgerError, is_unique_violation};
use crate::money::Money;

/// Account repository: create and fetch balance records
///
/// Single-row operations; the datastore's own row isolation is enough here.
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
    op_timeout: Duration,
}

impl AccountRepository {
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    /// Insert a new account with its opening balance
    ///
    /// Fails with `DuplicateAccount` if the id is taken; the existing row is untouched.
    pub async fn create_account(
        &self,
        id: i64,
        initial_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        let id = AccountId::new(id)?;
        let balance = Money::positive(initial_balance)?;

        let result = timeout(
            self.op_timeout,
            sqlx::query("INSERT INTO accounts (id, balance) VALUES ($1, $2)")
                .bind(id.get())
                .bind(balance.value())
                .execute(&self.pool),
        )
        .await?;

        match result {
            Ok(_) => {
                tracing::info!(account_id = %id, balance = %balance, "Account created");
                Ok(Account { id, balance })
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!(account_id = %id, "Account already exists");
                Err(LedgerError::DuplicateAccount(id.get()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get account by ID
    pub async fn get_account(&self, id: i64) -> Result<Account, LedgerError> {
        let id = AccountId::new(id)?;

        let balance = timeout(
            self.op_timeout,
            sqlx::query_scalar::<_, Decimal>("SELECT balance FROM accounts WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool),
        )
        .await??;

        balance
            .map(|b| Account {
                id,
                balance: Money::from_stored(b),
            })
            .ok_or(LedgerError::NotFound(id.get()))
    }
}
