//! PostgreSQL connectivity probe.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::StoreProbe;
use crate::error::AppError;

pub struct PgStoreProbe {
    pool: Arc<PgPool>,
}

impl PgStoreProbe {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreProbe for PgStoreProbe {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
