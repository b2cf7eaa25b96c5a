//! Internal Transfers service
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────────┐    ┌────────────┐
//! │  Config  │───▶│  PgPool  │───▶│ Accounts/Engine  │───▶│  Gateway   │
//! │  (YAML)  │    │ (schema) │    │ (row locks)      │    │  (axum)    │
//! └──────────┘    └──────────┘    └──────────────────┘    └────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;

use internal_transfers::config::{AppConfig, CliArgs};
use internal_transfers::db::{Database, schema};
use internal_transfers::gateway::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliArgs::from_env_args()?;
    let mut app_config = AppConfig::load(&cli.env)?;
    if let Some(port) = cli.port {
        app_config.gateway.port = port;
    }
    let _log_guard = internal_transfers::logging::init_logging(&app_config)?;

    tracing::info!("Starting Internal Transfers in {} mode", cli.env);

    let db = Database::connect(&app_config.database)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to PostgreSQL at {}:{}",
                app_config.database.host, app_config.database.port
            )
        })?;
    schema::init_schema(db.pool())
        .await
        .context("Failed to initialize schema")?;

    let state = Arc::new(AppState::new(db, app_config.ledger.operation_timeout()));
    gateway::run_server(&app_config.gateway, state).await
}
