//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The code may be either the generated `short_url` or the record's
/// `custom_url`. The `Location` header carries `original_url` exactly as it
/// was submitted.
///
/// # Errors
///
/// Returns 404 Not Found if no record has this code.
/// Returns 410 Gone if the record has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.resolve(&code).await?;

    debug!(code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url.original_url)]))
}
