use async_trait::async_trait;
use sqlx::PgPool;

use super::{Store, StoreError, StoreResult};
use crate::models::{
    comment::{Comment, NewComment},
    pageview::Pageview,
    post::{FeedPost, NewPost, Post},
};

/// Postgres SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// [`Store`] backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the bundled migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_post(&self, post: &NewPost) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO posts (url, message)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&post.url)
        .bind(&post.message)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(post_id = id, "post created");
        Ok(id)
    }

    async fn create_comment(&self, comment: &NewComment) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (post_id, message)
            VALUES ($1, $2)
            "#,
        )
        .bind(comment.post_id)
        .bind(&comment.message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let missing_post = e
                .as_database_error()
                .and_then(|db| db.code())
                .is_some_and(|code| code == FOREIGN_KEY_VIOLATION);
            if missing_post {
                StoreError::NotFound
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn get_post(&self, id: i64) -> StoreResult<(Post, Vec<Comment>)> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, url, message, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)?;

        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, message, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok((post, comments))
    }

    async fn list_feed(&self, limit: i64, offset: i64) -> StoreResult<Vec<FeedPost>> {
        let posts = sqlx::query_as::<_, FeedPost>(
            r#"
            SELECT
                p.id, p.url, p.message, p.created_at,
                (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comments_count
            FROM posts p
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn upsert_daily_counter(&self, day: &str) -> StoreResult<()> {
        // Single statement: concurrent visits serialize on the primary key.
        sqlx::query(
            r#"
            INSERT INTO pageviews (day, count)
            VALUES ($1, 1)
            ON CONFLICT (day) DO UPDATE SET count = pageviews.count + 1
            "#,
        )
        .bind(day)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_daily_counters(&self, limit: i64) -> StoreResult<Vec<Pageview>> {
        let rows = sqlx::query_as::<_, Pageview>(
            r#"
            SELECT day, count
            FROM pageviews
            ORDER BY day DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
