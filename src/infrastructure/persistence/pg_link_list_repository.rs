//! PostgreSQL implementation of the link list repository.
//!
//! Lists live in `link_lists`, their entries in `link_entries` with a
//! `position` column preserving submission order. Creation and deletion run
//! in a single transaction each.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LinkEntry, LinkList, NewLinkList};
use crate::domain::repositories::LinkListRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkListRow {
    id: i64,
    short_link: String,
}

#[derive(sqlx::FromRow)]
struct LinkEntryRow {
    id: i64,
    title: String,
    description: String,
    url: String,
    position: i32,
}

impl From<LinkEntryRow> for LinkEntry {
    fn from(r: LinkEntryRow) -> Self {
        LinkEntry {
            id: r.id,
            title: r.title,
            description: r.description,
            url: r.url,
            position: r.position,
        }
    }
}

/// PostgreSQL repository for link lists.
pub struct PgLinkListRepository {
    pool: Arc<PgPool>,
}

impl PgLinkListRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkListRepository for PgLinkListRepository {
    async fn create(&self, new_list: NewLinkList) -> Result<LinkList, AppError> {
        let mut tx = self.pool.begin().await?;

        let list = sqlx::query_as::<_, LinkListRow>(
            "INSERT INTO link_lists (short_link) VALUES ($1) RETURNING id, short_link",
        )
        .bind(&new_list.short_link)
        .fetch_one(&mut *tx)
        .await?;

        let mut entries = Vec::with_capacity(new_list.entries.len());

        if !new_list.entries.is_empty() {
            let count = new_list.entries.len();
            let mut positions = Vec::with_capacity(count);
            let mut titles = Vec::with_capacity(count);
            let mut descriptions = Vec::with_capacity(count);
            let mut urls = Vec::with_capacity(count);

            for (position, entry) in new_list.entries.into_iter().enumerate() {
                positions.push(position as i32);
                titles.push(entry.title);
                descriptions.push(entry.description);
                urls.push(entry.url);
            }

            let rows = sqlx::query_as::<_, LinkEntryRow>(
                r#"
                INSERT INTO link_entries (link_list_id, position, title, description, url)
                SELECT $1, t.position, t.title, t.description, t.url
                FROM UNNEST($2::int4[], $3::text[], $4::text[], $5::text[])
                    AS t(position, title, description, url)
                RETURNING id, title, description, url, position
                "#,
            )
            .bind(list.id)
            .bind(&positions)
            .bind(&titles)
            .bind(&descriptions)
            .bind(&urls)
            .fetch_all(&mut *tx)
            .await?;

            entries.extend(rows.into_iter().map(LinkEntry::from));
            entries.sort_by_key(|e| e.position);
        }

        tx.commit().await?;

        Ok(LinkList {
            id: list.id,
            short_link: list.short_link,
            entries,
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkList>, AppError> {
        let Some(list) = sqlx::query_as::<_, LinkListRow>(
            "SELECT id, short_link FROM link_lists WHERE short_link = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?
        else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, LinkEntryRow>(
            r#"
            SELECT id, title, description, url, position
            FROM link_entries
            WHERE link_list_id = $1
            ORDER BY position, id
            "#,
        )
        .bind(list.id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Some(LinkList {
            id: list.id,
            short_link: list.short_link,
            entries: rows.into_iter().map(LinkEntry::from).collect(),
        }))
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM link_lists WHERE short_link = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM link_lists")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let Some(list_id) =
            sqlx::query_scalar::<_, i64>("SELECT id FROM link_lists WHERE short_link = $1 FOR UPDATE")
                .bind(code)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Ok(false);
        };

        // Entries are removed explicitly before their list.
        sqlx::query("DELETE FROM link_entries WHERE link_list_id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM link_lists WHERE id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }
}
