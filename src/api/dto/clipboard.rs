//! DTOs for clipboard endpoints.

use serde::{Deserialize, Serialize};

/// Body of both the create and the update request.
#[derive(Debug, Deserialize)]
pub struct ClipboardRequest {
    pub clipboard_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateClipboardResponse {
    pub clipboard_short_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClipboardResponse {
    pub clipboard_text: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
