//! Daybook HTTP server binary.
//!
//! Loads layered configuration, connects to `PostgreSQL`, applies the schema,
//! and serves the todo API.

use clap::Parser;
use daybook::config::{ServerCliArgs, ServerConfig};
use daybook::server::start_server;
use daybook::todo::adapters::postgres::{PostgresTodoRepository, apply_schema};
use daybook::todo::services::TodoService;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = ServerCliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    let config = match ServerConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.clone());
    let pool = Pool::builder().build(manager)?;

    bootstrap_schema(pool.clone()).await?;

    let repository = Arc::new(PostgresTodoRepository::new(pool));
    let service = TodoService::new(repository, Arc::new(DefaultClock));

    let (addr, handle) = start_server(&config.bind_addr, service).await?;
    tracing::info!(%addr, "daybook server listening");

    handle.await?;
    Ok(())
}

/// Applies the todos schema on startup; idempotent via `IF NOT EXISTS`.
async fn bootstrap_schema(
    pool: Pool<ConnectionManager<PgConnection>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        apply_schema(&mut conn)?;
        Ok::<_, Box<dyn std::error::Error + Send + Sync>>(())
    })
    .await?
}
