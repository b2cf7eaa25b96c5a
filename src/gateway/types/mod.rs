//! Gateway types module
//!
//! ## Input Types
//! - [`CreateAccountRequest`], [`CreateTransactionRequest`]: JSON bodies.
//!   Amounts arrive as strings and are truncated to 2 dp here, so the core
//!   only ever sees values on its grid.
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`AccountResponse`], [`TransactionResponse`]
//!
//! ## Submodules
//! - [`account`]: Account DTOs
//! - [`transfer`]: Transaction DTOs
//! - [`response`]: Response envelope, `ApiError`, and error codes

pub mod account;
pub mod response;
pub mod transfer;

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::money::{parse_decimal_str, truncate_to_scale};

// Re-export commonly used types at module root
pub use account::{AccountResponse, CreateAccountRequest};
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
pub use transfer::{CreateTransactionRequest, TransactionResponse};

/// Strict-format parse of a client amount, then truncation to 2 dp.
///
/// Sign checks are left to the core so the error text stays uniform.
pub(crate) fn parse_client_amount(field: &str, raw: &str) -> Result<Decimal, LedgerError> {
    let value = parse_decimal_str(raw)
        .map_err(|e| LedgerError::invalid(format!("{}: {}", field, e)))?;
    Ok(truncate_to_scale(value))
}
