//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum server
//! lifecycle.

use crate::api::middleware::cors;
use crate::application::services::{ClipboardService, LinkListService, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgClipboardRepository, PgLinkListRepository, PgStoreProbe, PgUrlRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the connection pool described by `config`.
///
/// # Errors
///
/// Returns an error if no connection can be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Wires repositories and services over `pool`.
///
/// # Errors
///
/// Returns an error if the code generator cannot be seeded.
pub fn build_state(pool: PgPool, code_max_attempts: usize) -> Result<AppState> {
    let pool = Arc::new(pool);
    let codes = Arc::new(CodeGenerator::from_entropy()?);

    let url_service = UrlService::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        codes.clone(),
        code_max_attempts,
    );
    let link_list_service = LinkListService::new(
        Arc::new(PgLinkListRepository::new(pool.clone())),
        codes.clone(),
        code_max_attempts,
    );
    let clipboard_service = ClipboardService::new(
        Arc::new(PgClipboardRepository::new(pool.clone())),
        codes,
        code_max_attempts,
    );

    Ok(AppState::new(
        Arc::new(url_service),
        Arc::new(link_list_service),
        Arc::new(clipboard_service),
        Arc::new(PgStoreProbe::new(pool)),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Services and repositories
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let state = build_state(pool, config.code_max_attempts)?;
    let cors = cors::layer(&config.frontend_origin)?;

    let app = app_router(state, cors);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
