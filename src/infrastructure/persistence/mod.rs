//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters for every query.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Short URL storage and lookup
//! - [`PgLinkListRepository`] - Link lists and their entries
//! - [`PgClipboardRepository`] - Clipboard entries
//! - [`PgStoreProbe`] - Connectivity check for the health endpoint

pub mod pg_clipboard_repository;
pub mod pg_link_list_repository;
pub mod pg_store_probe;
pub mod pg_url_repository;

pub use pg_clipboard_repository::PgClipboardRepository;
pub use pg_link_list_repository::PgLinkListRepository;
pub use pg_store_probe::PgStoreProbe;
pub use pg_url_repository::PgUrlRepository;
