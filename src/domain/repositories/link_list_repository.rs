//! Repository trait for link lists and their entries.

use crate::domain::entities::{LinkList, NewLinkList};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for link lists.
///
/// A list and its entries are always written together.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkListRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkListRepository: Send + Sync {
    /// Creates a list with all of its entries atomically.
    ///
    /// Entries keep the order of `new_list.entries`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_link` is already taken.
    /// Returns [`AppError::Persistence`] on other database errors; nothing is
    /// written in that case.
    async fn create(&self, new_list: NewLinkList) -> Result<LinkList, AppError>;

    /// Finds a list by code, with entries in insertion order.
    async fn find_by_code(&self, code: &str) -> Result<Option<LinkList>, AppError>;

    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Deletes a list and all of its entries.
    ///
    /// Returns `Ok(false)` if no list has this code.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
