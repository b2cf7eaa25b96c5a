//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError`: Error half of every handler result, renders the same envelope
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::LedgerError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Handler Results
// ============================================================================

/// Result type returned by every JSON handler
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK with data
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 Created with data
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

/// HTTP error: status line plus envelope code and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        )
            .into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        use error_codes::*;

        let (status, code) = match &e {
            LedgerError::InvalidInput(_) => (StatusCode::BAD_REQUEST, INVALID_PARAMETER),
            LedgerError::InsufficientBalance => (StatusCode::BAD_REQUEST, INSUFFICIENT_BALANCE),
            LedgerError::NotFound(_)
            | LedgerError::SourceAccountNotFound(_)
            | LedgerError::DestinationAccountNotFound(_) => {
                (StatusCode::NOT_FOUND, ACCOUNT_NOT_FOUND)
            }
            LedgerError::TransferNotFound(_) => (StatusCode::NOT_FOUND, TRANSFER_NOT_FOUND),
            LedgerError::DuplicateAccount(_) => (StatusCode::CONFLICT, DUPLICATE_ACCOUNT),
            LedgerError::DuplicateTransfer(_) => (StatusCode::CONFLICT, DUPLICATE_TRANSFER),
            LedgerError::Timeout => (StatusCode::GATEWAY_TIMEOUT, TIMEOUT),
            LedgerError::StorageFault(detail) => {
                tracing::error!(error = %detail, "Storage fault");
                return ApiError::internal("Internal server error");
            }
        };
        ApiError::new(status, code, e.to_string())
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_BALANCE: i32 = 1002;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4001;
    pub const TRANSFER_NOT_FOUND: i32 = 4002;
    pub const DUPLICATE_ACCOUNT: i32 = 4091;
    pub const DUPLICATE_TRANSFER: i32 = 4092;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
    pub const TIMEOUT: i32 = 5004;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error(1001, "bad")).unwrap();
        assert_eq!(json["code"], 1001);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_ledger_error_status_mapping() {
        let cases = [
            (LedgerError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (LedgerError::InsufficientBalance, StatusCode::BAD_REQUEST),
            (LedgerError::NotFound(1), StatusCode::NOT_FOUND),
            (LedgerError::SourceAccountNotFound(1), StatusCode::NOT_FOUND),
            (LedgerError::DestinationAccountNotFound(2), StatusCode::NOT_FOUND),
            (LedgerError::TransferNotFound("t".into()), StatusCode::NOT_FOUND),
            (LedgerError::DuplicateAccount(1), StatusCode::CONFLICT),
            (LedgerError::DuplicateTransfer("t".into()), StatusCode::CONFLICT),
            (LedgerError::Timeout, StatusCode::GATEWAY_TIMEOUT),
            (
                LedgerError::StorageFault("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            let label = format!("{:?}", err);
            assert_eq!(ApiError::from(err).status, status, "{}", label);
        }
    }

    #[test]
    fn test_storage_fault_detail_hidden() {
        let api = ApiError::from(LedgerError::StorageFault("password=hunter2".into()));
        assert_eq!(api.msg, "Internal server error");
        assert_eq!(api.code, error_codes::INTERNAL_ERROR);
    }
}
