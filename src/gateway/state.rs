use std::time::Duration;

use crate::account::AccountRepository;
use crate::db::Database;
use crate::transfer::TransferEngine;

/// Gateway shared state
///
/// Every component holds a clone of the same pool.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool (health checks)
    pub db: Database,
    /// Account create / lookup
    pub accounts: AccountRepository,
    /// Atomic transfers
    pub transfers: TransferEngine,
}

impl AppState {
    pub fn new(db: Database, op_timeout: Duration) -> Self {
        let pool = db.pool().clone();
        Self {
            accounts: AccountRepository::new(pool.clone(), op_timeout),
            transfers: TransferEngine::new(pool, op_timeout),
            db,
        }
    }
}
