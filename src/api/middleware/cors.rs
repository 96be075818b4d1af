//! Cross-origin policy for the browser frontend.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Builds a CORS layer that admits exactly one origin.
///
/// Allowed methods are `GET`, `POST`, `PUT` and `DELETE`; allowed request
/// headers are `Content-Type` and `Authorization`.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
pub fn layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("Invalid CORS origin '{origin}'"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
