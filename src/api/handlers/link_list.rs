//! Handlers for link list endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::link_list::{
    CreateLinkListRequest, CreateLinkListResponse, LinkEntryResponse, LinkListResponse,
};
use crate::api::extract::JsonBody;
use crate::domain::entities::NewLinkEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a link list from up to 50 entries.
///
/// # Endpoint
///
/// `POST /linklist`
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     { "title": "Rust", "description": "Language home", "url": "https://rust-lang.org" },
///     { "title": "Crates", "url": "https://crates.io" }
///   ],
///   "customShortLink": "reading"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "shortLink": "reading" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for more than 50 entries, invalid entries, or a
/// taken custom short link.
/// Returns 500 Internal Server Error if the list cannot be stored.
pub async fn create_link_list_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateLinkListRequest>,
) -> Result<Json<CreateLinkListResponse>, AppError> {
    payload.validate()?;

    let entries: Vec<NewLinkEntry> = payload.urls.into_iter().map(Into::into).collect();

    let list = state
        .link_list_service
        .create(entries, payload.custom_short_link)
        .await?;

    Ok(Json(CreateLinkListResponse {
        short_link: list.short_link,
    }))
}

/// Returns the entries of a link list in the order they were submitted.
///
/// # Endpoint
///
/// `GET /linklist/{code}`
///
/// # Response
///
/// ```json
/// {
///   "urls": [
///     { "id": 1, "title": "Rust", "description": "Language home", "url": "https://rust-lang.org" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no list has this code.
pub async fn get_link_list_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let list = state.link_list_service.get(&code).await?;

    Ok(Json(LinkListResponse {
        urls: list
            .entries
            .into_iter()
            .map(LinkEntryResponse::from)
            .collect(),
    }))
}
