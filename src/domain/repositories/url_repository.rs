//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_url` or `custom_url` is already taken.
    /// Returns [`AppError::Persistence`] on other database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record whose `short_url` or `custom_url` equals `code`.
    ///
    /// Expired records are returned as well; expiry is checked by the caller.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Returns true if `code` is taken as either lookup key.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
