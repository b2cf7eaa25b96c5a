//! Ledger schema (accounts + transfers)
//!
//! Constraints carry part of the invariants:
//! - `balance >= 0` is checked by the datastore as well as by the engine
//! - `transfer_id` is UNIQUE so a replayed transfer can never double-apply

use sqlx::PgPool;

/// Create the ledger tables if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing ledger schema...");

    // Concurrent CREATE TABLE IF NOT EXISTS can still collide in pg_type,
    // so instances starting together take turns.
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(&mut *tx).await?;
    sqlx::query(CREATE_TRANSFERS_TABLE).execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("Ledger schema initialized successfully");
    Ok(())
}

const SCHEMA_LOCK_KEY: i64 = 0x1ED6_E700;

const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id      BIGINT PRIMARY KEY CHECK (id > 0),
    balance NUMERIC(20, 2) NOT NULL CHECK (balance >= 0)
)
"#;

const CREATE_TRANSFERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transfers (
    id                     BIGSERIAL PRIMARY KEY,
    transfer_id            VARCHAR(255) NOT NULL UNIQUE,
    source_account_id      BIGINT NOT NULL REFERENCES accounts (id),
    destination_account_id BIGINT NOT NULL REFERENCES accounts (id),
    amount                 NUMERIC(20, 2) NOT NULL CHECK (amount > 0),
    created_at             TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CHECK (source_account_id <> destination_account_id)
)
"#;
