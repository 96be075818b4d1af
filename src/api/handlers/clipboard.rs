//! Handlers for clipboard endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::clipboard::{
    ClipboardRequest, ClipboardResponse, CreateClipboardResponse, MessageResponse,
};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Stores text under a new code.
///
/// # Endpoint
///
/// `POST /clipboard`
///
/// # Request Body
///
/// ```json
/// { "clipboard_text": "anything, of any length" }
/// ```
///
/// # Response
///
/// ```json
/// { "clipboard_short_url": "Xy7Pq2" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the entry cannot be stored.
pub async fn create_clipboard_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ClipboardRequest>,
) -> Result<Json<CreateClipboardResponse>, AppError> {
    let clipboard = state
        .clipboard_service
        .create(payload.clipboard_text)
        .await
        .map_err(AppError::into_creation_failure)?;

    Ok(Json(CreateClipboardResponse {
        clipboard_short_url: clipboard.clipboard_short_url,
    }))
}

/// Returns the text stored under a code.
///
/// # Endpoint
///
/// `GET /clipboard/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no entry has this code.
pub async fn get_clipboard_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClipboardResponse>, AppError> {
    let clipboard = state.clipboard_service.get(&code).await?;

    Ok(Json(ClipboardResponse {
        clipboard_text: clipboard.clipboard_text,
        id: clipboard.id,
    }))
}

/// Replaces the text stored under a code.
///
/// # Endpoint
///
/// `PUT /clipboard/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no entry has this code.
/// Returns 400 Bad Request if the update cannot be stored.
pub async fn update_clipboard_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ClipboardRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .clipboard_service
        .update(&code, &payload.clipboard_text)
        .await
        .map_err(AppError::into_creation_failure)?;

    Ok(Json(MessageResponse {
        message: "Clipboard updated successfully".to_string(),
    }))
}
