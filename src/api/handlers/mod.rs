//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clipboard;
pub mod health;
pub mod link_list;
pub mod redirect;
pub mod shorten;

pub use clipboard::{create_clipboard_handler, get_clipboard_handler, update_clipboard_handler};
pub use health::health_handler;
pub use link_list::{create_link_list_handler, get_link_list_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
