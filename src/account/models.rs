//! Data models for the account store

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::money::Money;

/// Account identifier - positive, externally assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Result<Self, LedgerError> {
        if id <= 0 {
            return Err(LedgerError::invalid(format!(
                "account id must be positive, got {}",
                id
            )));
        }
        Ok(Self(id))
    }

    /// Raw value for PostgreSQL binding
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account balance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub balance: Money,
}
