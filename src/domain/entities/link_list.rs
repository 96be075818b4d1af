//! Link list entity: a code pointing at an ordered batch of links.

/// Maximum number of entries a list may hold, checked at creation time.
pub const MAX_LIST_ENTRIES: usize = 50;

/// A titled link inside a list.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkEntry {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Zero-based insertion order within the owning list.
    pub position: i32,
}

/// A link list with its entries in insertion order.
///
/// Entries are owned by the list and written together with it; they are never
/// added, edited or removed individually.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkList {
    pub id: i64,
    pub short_link: String,
    pub entries: Vec<LinkEntry>,
}

/// Entry as submitted by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLinkEntry {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl NewLinkEntry {
    /// Creates an entry; a missing description is stored as an empty string.
    pub fn new(title: String, description: Option<String>, url: String) -> Self {
        Self {
            title,
            description: description.unwrap_or_default(),
            url,
        }
    }
}

/// Input data for creating a list together with all of its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLinkList {
    pub short_link: String,
    pub entries: Vec<NewLinkEntry>,
}
