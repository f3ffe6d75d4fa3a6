// src/store/mod.rs

//! Storage gateway.
//!
//! The services only talk to storage through [`Store`], so any backend that
//! can honour these six operations (including an in-memory double in tests)
//! is substitutable for [`PgStore`].

mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    comment::{Comment, NewComment},
    pageview::Pageview,
    post::{FeedPost, NewPost, Post},
};

#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched, or a comment referenced a post that does not exist.
    #[error("row not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a post and return its id.
    async fn create_post(&self, post: &NewPost) -> StoreResult<i64>;

    /// Insert a comment. Does not check that the post exists beforehand.
    async fn create_comment(&self, comment: &NewComment) -> StoreResult<()>;

    /// Fetch one post and its comments ordered by creation time.
    async fn get_post(&self, id: i64) -> StoreResult<(Post, Vec<Comment>)>;

    /// Most recent posts first, `limit` rows starting at `offset`.
    /// Past the end this is an empty list, never an error.
    async fn list_feed(&self, limit: i64, offset: i64) -> StoreResult<Vec<FeedPost>>;

    /// Insert `(day, 1)` or add one to the existing row, atomically.
    async fn upsert_daily_counter(&self, day: &str) -> StoreResult<()>;

    /// Daily counters, most recent day first.
    async fn list_daily_counters(&self, limit: i64) -> StoreResult<Vec<Pageview>>;
}
