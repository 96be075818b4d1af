//! DTOs for link list endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{LinkEntry, NewLinkEntry};

/// Request to create a link list.
///
/// ```json
/// {
///   "urls": [{ "title": "Rust", "description": "Home", "url": "https://rust-lang.org" }],
///   "customShortLink": "reading"
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkListRequest {
    #[validate(nested)]
    pub urls: Vec<LinkEntryItem>,

    #[serde(default, rename = "customShortLink")]
    #[validate(length(min = 1, max = 10, message = "Custom short link must be 1-10 characters"))]
    pub custom_short_link: Option<String>,
}

/// One submitted entry.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkEntryItem {
    /// Required, but may be empty.
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "URL must be at most 255 characters"))]
    pub url: String,
}

impl From<LinkEntryItem> for NewLinkEntry {
    fn from(item: LinkEntryItem) -> Self {
        NewLinkEntry::new(item.title, item.description, item.url)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLinkListResponse {
    #[serde(rename = "shortLink")]
    pub short_link: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub urls: Vec<LinkEntryResponse>,
}

/// An entry as returned to the caller, without its position.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkEntryResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl From<LinkEntry> for LinkEntryResponse {
    fn from(entry: LinkEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            description: entry.description,
            url: entry.url,
        }
    }
}
