//! Clipboard entity: free text behind a short code.

use chrono::{DateTime, Utc};

/// A shared clipboard entry.
///
/// `clipboard_text` is the only mutable field. Entries never expire.
#[derive(Debug, Clone, PartialEq)]
pub struct Clipboard {
    pub id: i64,
    pub clipboard_text: String,
    pub clipboard_short_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a clipboard entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClipboard {
    pub clipboard_text: String,
    pub clipboard_short_url: String,
}
