//! Repository trait for clipboard entries.

use crate::domain::entities::{Clipboard, NewClipboard};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for clipboard entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClipboardRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardRepository: Send + Sync {
    /// Creates a clipboard entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    async fn create(&self, new_clipboard: NewClipboard) -> Result<Clipboard, AppError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Clipboard>, AppError>;

    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Replaces the text of an entry in place.
    ///
    /// Returns `Ok(false)` if no entry has this code.
    async fn update_text(&self, code: &str, clipboard_text: &str) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
