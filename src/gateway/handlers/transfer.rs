//! Transaction handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, CreateTransactionRequest, TransactionResponse, created, ok,
};

/// Submit transaction endpoint
///
/// POST /transactions
///
/// Moves `amount` from source to destination atomically. Replaying a
/// `transaction_id` is rejected with 409 and changes nothing.
#[utoipa::path(
    post,
    path = "/transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction committed", body = TransactionResponse, content_type = "application/json"),
        (status = 400, description = "Invalid parameters or insufficient balance"),
        (status = 404, description = "Source or destination account not found"),
        (status = 409, description = "Transaction id already used"),
        (status = 504, description = "Operation timed out")
    ),
    tag = "Transaction"
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> ApiResult<TransactionResponse> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let amount = req.amount()?;

    let record = state
        .transfers
        .execute_transfer(
            req.source_account_id,
            req.destination_account_id,
            amount,
            &req.transaction_id,
        )
        .await?;
    created(record.into())
}

/// Get transaction endpoint
///
/// GET /transactions/{transaction_id}
#[utoipa::path(
    get,
    path = "/transactions/{transaction_id}",
    params(
        ("transaction_id" = String, Path, description = "Client-supplied transaction id")
    ),
    responses(
        (status = 200, description = "Committed transaction", body = TransactionResponse, content_type = "application/json"),
        (status = 404, description = "Transaction not found")
    ),
    tag = "Transaction"
)]
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<String>,
) -> ApiResult<TransactionResponse> {
    let record = state.transfers.get_transfer(&transaction_id).await?;
    ok(record.into())
}
