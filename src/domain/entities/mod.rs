//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Each type has a separate `New*` struct
//! used for creation:
//!
//! - [`ShortUrl`] / [`NewShortUrl`] - A shortened URL with optional expiry
//! - [`LinkList`] / [`NewLinkList`] - A code pointing at an ordered list of links
//! - [`Clipboard`] / [`NewClipboard`] - Free text behind a code

pub mod clipboard;
pub mod link_list;
pub mod short_url;

pub use clipboard::{Clipboard, NewClipboard};
pub use link_list::{LinkEntry, LinkList, MAX_LIST_ENTRIES, NewLinkEntry, NewLinkList};
pub use short_url::{NewShortUrl, ShortUrl};
