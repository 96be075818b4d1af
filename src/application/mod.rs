//! Application layer services implementing business logic.
//!
//! Services validate input, resolve codes and coordinate repository calls.
//! They consume repository traits and are shared by the HTTP handlers and the
//! admin tool.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - URL shortening and redirect resolution
//! - [`services::link_list_service::LinkListService`] - Link lists with ordered entries
//! - [`services::clipboard_service::ClipboardService`] - Online clipboard entries

pub mod services;
