//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/some/long/path",
///   "expiry": "1d",          // optional: 1h, 1d, 1w, 1m, 1y, lifetime
///   "custom_url": "promo"    // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "Ab3dE9" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed URL, a taken custom code, or any
/// failure while storing the record.
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let url = state
        .url_service
        .shorten(
            payload.original_url,
            payload.expiry.as_deref(),
            payload.custom_url,
        )
        .await
        .map_err(AppError::into_creation_failure)?;

    Ok(Json(ShortenResponse {
        short_url: url.short_url,
    }))
}
