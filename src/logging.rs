//! Tracing subscriber setup
//!
//! File output always goes through a non-blocking rolling appender. Text mode
//! mirrors events to stdout; JSON mode writes the file only.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

/// Install the global subscriber. Keep the returned guard alive until exit,
/// otherwise buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(parse_rotation(&config.rotation)?)
        .filename_prefix(&config.log_file)
        .build(&config.log_dir)
        .with_context(|| format!("Failed to open log directory {}", config.log_dir))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_ansi(false).with_writer(writer))
            .with(fmt::layer().with_target(false))
            .init();
    }

    Ok(guard)
}

fn parse_rotation(name: &str) -> Result<Rotation> {
    match name {
        "hourly" => Ok(Rotation::HOURLY),
        "daily" => Ok(Rotation::DAILY),
        "never" => Ok(Rotation::NEVER),
        other => anyhow::bail!("unknown log rotation '{}' (hourly, daily, never)", other),
    }
}

/// `log_level` for our events; sqlx logs every statement at info, so it stays at warn
fn default_directives(log_level: &str) -> String {
    format!("{},sqlx=warn", log_level)
}
