//! API route configuration.

use crate::api::handlers::{
    create_clipboard_handler, create_link_list_handler, get_clipboard_handler,
    get_link_list_handler, shorten_handler, update_clipboard_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Creation and retrieval routes for all three entity types.
///
/// # Endpoints
///
/// - `POST /shorten`           - Create a short URL
/// - `POST /linklist`          - Create a link list
/// - `GET  /linklist/{code}`   - Fetch a link list's entries
/// - `POST /clipboard`         - Create a clipboard entry
/// - `GET  /clipboard/{code}`  - Fetch a clipboard entry
/// - `PUT  /clipboard/{code}`  - Replace a clipboard entry's text
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/linklist", post(create_link_list_handler))
        .route("/linklist/{code}", get(get_link_list_handler))
        .route("/clipboard", post(create_clipboard_handler))
        .route(
            "/clipboard/{code}",
            get(get_clipboard_handler).put(update_clipboard_handler),
        )
}
