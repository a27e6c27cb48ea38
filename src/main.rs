//! bookshelf server entry point.
//!
//! Loads configuration, provisions the record store, and serves the REST
//! API until SIGINT/SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bookshelf::api;
use bookshelf::app_state::AppState;
use bookshelf::auth::StaticBearerToken;
use bookshelf::config::{ServiceConfig, StoreBackend};
use bookshelf::provision;
use bookshelf::server;
use bookshelf::store::{BookStore, MemoryBookStore, PgBookStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    tracing::info!(addr = %config.listen_addr, backend = ?config.store_backend, "starting bookshelf");

    // Build record store
    let store: Arc<dyn BookStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = provision::establish(&config.database)
                .await
                .context("database unavailable")?;
            provision::run_migrations(&pool)
                .await
                .context("schema migration failed")?;
            Arc::new(PgBookStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryBookStore::new())
        }
    };

    // Build application state and router
    let app_state = AppState::new(store, Arc::new(StaticBearerToken::new(&config.api_token)));
    let app = api::build_router(app_state, config.body_limit_bytes);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    server::serve(
        listener,
        app,
        server::shutdown_signal(),
        config.shutdown_grace,
    )
    .await?;

    Ok(())
}
