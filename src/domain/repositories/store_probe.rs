//! Connectivity check for the backing store.

use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Runs a trivial round trip against the store.
    async fn ping(&self) -> Result<(), AppError>;
}
