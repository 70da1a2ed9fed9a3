// src/main.rs
mod choice;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod poll;
mod question;
mod routes;

use anyhow::Context;
use axum_server::Handle;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// How long in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); // Load environment variables from .env file

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("poll_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let pool = db::create_pool(&config)
        .await
        .context("could not connect to the database")?;
    db::migrate(&pool).await.context("could not apply migrations")?;
    tracing::info!(max_connections = config.max_connections, "database ready");

    let app = routes::create_routes(pool.clone(), config.cors_origin.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let handle = Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    tracing::info!(%addr, "backend listening");
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, then drain connections.
async fn shutdown_signal(handle: Handle) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }

    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}
