//! Account request/response DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::account::Account;
use crate::error::LedgerError;

use super::parse_client_amount;

/// POST /accounts body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Caller-assigned positive account id
    #[schema(example = 123)]
    pub account_id: i64,
    /// Opening balance as a decimal string; digits past 2 dp are truncated
    #[schema(example = "100.23344")]
    pub initial_balance: String,
}

impl CreateAccountRequest {
    pub fn initial_balance(&self) -> Result<Decimal, LedgerError> {
        parse_client_amount("initial_balance", &self.initial_balance)
    }
}

/// Account balance response data
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    #[schema(example = 123)]
    pub account_id: i64,
    /// Balance, always rendered with 2 decimal places
    #[schema(example = "100.23")]
    pub balance: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id.get(),
            balance: account.balance.to_string(),
        }
    }
}
