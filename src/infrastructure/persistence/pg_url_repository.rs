//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    original_url: String,
    short_url: String,
    custom_url: Option<String>,
    expiration_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl {
            id: r.id,
            original_url: r.original_url,
            short_url: r.short_url,
            custom_url: r.custom_url,
            expiration_date: r.expiration_date,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for short URLs.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO urls (original_url, short_url, custom_url, expiration_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, original_url, short_url, custom_url, expiration_date, created_at
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_url)
        .bind(&new_url.custom_url)
        .bind(new_url.expiration_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        // A generated code wins over a custom one if both happen to match.
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, short_url, custom_url, expiration_date, created_at
            FROM urls
            WHERE short_url = $1 OR custom_url = $1
            ORDER BY (short_url = $1) DESC
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM urls WHERE short_url = $1 OR custom_url = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
