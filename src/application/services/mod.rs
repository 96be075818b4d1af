//! Business logic services for the application layer.

pub mod clipboard_service;
pub mod link_list_service;
pub mod url_service;

pub use clipboard_service::ClipboardService;
pub use link_list_service::LinkListService;
pub use url_service::UrlService;
