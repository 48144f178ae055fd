//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by every `links` query.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_name: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.original_url, r.short_name, r.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Alias uniqueness is backed by the `links_short_name_key` constraint, so a
/// write that loses a race fails atomically and surfaces as
/// [`AppError::Conflict`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn list(&self, offset: i64, limit: Option<i64>) -> Result<Vec<Link>, AppError> {
        // LIMIT NULL is "no limit" in PostgreSQL.
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_name, created_at
            FROM links
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_name, created_at
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_name, created_at
            FROM links
            WHERE short_name = $1
            "#,
        )
        .bind(short_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (original_url, short_name)
            VALUES ($1, $2)
            RETURNING id, original_url, short_name, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_name)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| AppError::from_write_error(e, &new_link.short_name))?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, update: LinkUpdate) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET original_url = $1, short_name = $2
            WHERE id = $3
            RETURNING id, original_url, short_name, created_at
            "#,
        )
        .bind(&update.original_url)
        .bind(&update.short_name)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| AppError::from_write_error(e, &update.short_name))?;

        Ok(row.map(Link::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
