//! Server binary for the task store HTTP API.

use anyhow::Context;
use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskstore::api;
use taskstore::config::ServerConfig;
use taskstore::task::adapters::postgres::PostgresTaskRepository;
use taskstore::task::services::TaskService;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_filter);

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .context("building connection pool")?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = Arc::new(TaskService::new(repository, Arc::new(DefaultClock)));

    // Fail fast when storage is unreachable rather than serving a dead API.
    service
        .health()
        .await
        .context("storage unreachable at startup")?;

    let app = api::router(Arc::clone(&service), config.cors_layer());
    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "task store listening");
    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}

/// Initializes the tracing subscriber from the configured filter.
fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}
