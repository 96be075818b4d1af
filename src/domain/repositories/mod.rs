//! Repository trait definitions for the domain layer.
//!
//! Traits abstract data access following the Repository pattern and are
//! implemented in `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Short URL creation and lookup
//! - [`LinkListRepository`] - Link lists with their entries
//! - [`ClipboardRepository`] - Clipboard entries
//! - [`StoreProbe`] - Store connectivity check
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod clipboard_repository;
pub mod link_list_repository;
pub mod store_probe;
pub mod url_repository;

pub use clipboard_repository::ClipboardRepository;
pub use link_list_repository::LinkListRepository;
pub use store_probe::StoreProbe;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use clipboard_repository::MockClipboardRepository;
#[cfg(test)]
pub use link_list_repository::MockLinkListRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
