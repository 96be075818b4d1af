//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (database)
//! - `GET  /{code}`      - Short URL redirect
//! - `/shorten`, `/linklist/*`, `/clipboard/*` - see [`crate::api::routes`]
//!
//! Static paths win over `/{code}`; generated codes can never collide with
//! them and custom codes reserve them.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single frontend origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - cross-origin policy, see [`crate::api::middleware::cors::layer`]
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
