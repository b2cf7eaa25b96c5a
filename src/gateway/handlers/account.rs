//! Account handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{
    AccountResponse, ApiError, ApiResult, CreateAccountRequest, created, ok,
};

/// Create account endpoint
///
/// POST /accounts
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse, content_type = "application/json"),
        (status = 400, description = "Invalid account id or initial balance"),
        (status = 409, description = "Account already exists"),
        (status = 504, description = "Operation timed out")
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> ApiResult<AccountResponse> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let balance = req.initial_balance()?;

    let account = state.accounts.create_account(req.account_id, balance).await?;
    created(account.into())
}

/// Get account balance endpoint
///
/// GET /accounts/{account_id}
#[utoipa::path(
    get,
    path = "/accounts/{account_id}",
    params(
        ("account_id" = i64, Path, description = "Positive account id")
    ),
    responses(
        (status = 200, description = "Current balance", body = AccountResponse, content_type = "application/json"),
        (status = 400, description = "Account id is not a positive integer"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> ApiResult<AccountResponse> {
    let account_id: i64 = account_id
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid account id: {}", account_id)))?;

    let account = state.accounts.get_account(account_id).await?;
    ok(account.into())
}
