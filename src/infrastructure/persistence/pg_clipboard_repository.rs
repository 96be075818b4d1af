//! PostgreSQL implementation of the clipboard repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Clipboard, NewClipboard};
use crate::domain::repositories::ClipboardRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClipboardRow {
    id: i64,
    clipboard_text: String,
    clipboard_short_url: String,
    created_at: DateTime<Utc>,
}

impl From<ClipboardRow> for Clipboard {
    fn from(r: ClipboardRow) -> Self {
        Clipboard {
            id: r.id,
            clipboard_text: r.clipboard_text,
            clipboard_short_url: r.clipboard_short_url,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for clipboard entries.
pub struct PgClipboardRepository {
    pool: Arc<PgPool>,
}

impl PgClipboardRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClipboardRepository for PgClipboardRepository {
    async fn create(&self, new_clipboard: NewClipboard) -> Result<Clipboard, AppError> {
        let row = sqlx::query_as::<_, ClipboardRow>(
            r#"
            INSERT INTO clipboards (clipboard_text, clipboard_short_url)
            VALUES ($1, $2)
            RETURNING id, clipboard_text, clipboard_short_url, created_at
            "#,
        )
        .bind(&new_clipboard.clipboard_text)
        .bind(&new_clipboard.clipboard_short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Clipboard>, AppError> {
        let row = sqlx::query_as::<_, ClipboardRow>(
            r#"
            SELECT id, clipboard_text, clipboard_short_url, created_at
            FROM clipboards
            WHERE clipboard_short_url = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Clipboard::from))
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM clipboards WHERE clipboard_short_url = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn update_text(&self, code: &str, clipboard_text: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE clipboards SET clipboard_text = $2 WHERE clipboard_short_url = $1")
                .bind(code)
                .bind(clipboard_text)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clipboards")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
