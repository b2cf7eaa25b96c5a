//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    AccountResponse, CreateAccountRequest, CreateTransactionRequest, TransactionResponse,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Internal Transfers API",
        version = "1.0.0",
        description = "Account balances and atomic internal transfers backed by PostgreSQL.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_account,
        crate::gateway::handlers::get_account,
        crate::gateway::handlers::create_transaction,
        crate::gateway::handlers::get_transaction,
    ),
    components(
        schemas(
            HealthResponse,
            CreateAccountRequest,
            AccountResponse,
            CreateTransactionRequest,
            TransactionResponse,
        )
    ),
    tags(
        (name = "Account", description = "Account creation and balance queries"),
        (name = "Transaction", description = "Atomic transfers between accounts"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
