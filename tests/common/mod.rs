// tests/common/mod.rs

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use linkboard::{
    models::{
        comment::{Comment, NewComment},
        pageview::Pageview,
        post::{FeedPost, NewPost, Post},
    },
    store::{Store, StoreError, StoreResult},
};

#[derive(Default)]
struct Tables {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    pageviews: BTreeMap<String, i64>,
    next_id: i64,
}

/// In-memory `Store` with call counters and switchable failures.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    pub create_post_calls: AtomicUsize,
    pub create_comment_calls: AtomicUsize,
    pub fail_content: AtomicBool,
    pub fail_pageviews: AtomicBool,
    pub slow_pageviews: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_calls(&self) -> usize {
        self.create_post_calls.load(Ordering::SeqCst)
    }

    pub fn comment_calls(&self) -> usize {
        self.create_comment_calls.load(Ordering::SeqCst)
    }

    pub fn pageviews_for(&self, day: &str) -> i64 {
        let tables = self.tables.lock().unwrap();
        tables.pageviews.get(day).copied().unwrap_or(0)
    }

    pub fn seed_pageview(&self, day: &str, count: i64) {
        let mut tables = self.tables.lock().unwrap();
        tables.pageviews.insert(day.to_string(), count);
    }

    pub fn stored_url(&self, id: i64) -> Option<String> {
        let tables = self.tables.lock().unwrap();
        tables.posts.iter().find(|p| p.id == id).map(|p| p.url.clone())
    }

    fn check(flag: &AtomicBool) -> StoreResult<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn next_timestamp(tables: &mut Tables) -> (i64, chrono::DateTime<Utc>) {
        tables.next_id += 1;
        // Strictly increasing so ordering is deterministic.
        let at = Utc::now() - Duration::hours(1) + Duration::milliseconds(tables.next_id);
        (tables.next_id, at)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_post(&self, post: &NewPost) -> StoreResult<i64> {
        self.create_post_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_content)?;

        let mut tables = self.tables.lock().unwrap();
        let (id, created_at) = Self::next_timestamp(&mut tables);
        tables.posts.push(Post {
            id,
            url: post.url.clone(),
            message: post.message.clone(),
            created_at,
        });
        Ok(id)
    }

    async fn create_comment(&self, comment: &NewComment) -> StoreResult<()> {
        self.create_comment_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_content)?;

        let mut tables = self.tables.lock().unwrap();
        if !tables.posts.iter().any(|p| p.id == comment.post_id) {
            return Err(StoreError::NotFound);
        }
        let (id, created_at) = Self::next_timestamp(&mut tables);
        tables.comments.push(Comment {
            id,
            post_id: comment.post_id,
            message: comment.message.clone(),
            created_at,
        });
        Ok(())
    }

    async fn get_post(&self, id: i64) -> StoreResult<(Post, Vec<Comment>)> {
        Self::check(&self.fail_content)?;

        let tables = self.tables.lock().unwrap();
        let post = tables
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)?;
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok((post, comments))
    }

    async fn list_feed(&self, limit: i64, offset: i64) -> StoreResult<Vec<FeedPost>> {
        Self::check(&self.fail_content)?;

        let tables = self.tables.lock().unwrap();
        let mut posts = tables.posts.clone();
        posts.sort_by_key(|p| std::cmp::Reverse((p.created_at, p.id)));
        Ok(posts
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|p| FeedPost {
                comments_count: tables.comments.iter().filter(|c| c.post_id == p.id).count()
                    as i64,
                id: p.id,
                url: p.url,
                message: p.message,
                created_at: p.created_at,
            })
            .collect())
    }

    async fn upsert_daily_counter(&self, day: &str) -> StoreResult<()> {
        Self::check(&self.fail_pageviews)?;
        if self.slow_pageviews.load(Ordering::SeqCst) {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        }

        let mut tables = self.tables.lock().unwrap();
        *tables.pageviews.entry(day.to_string()).or_insert(0) += 1;
        Ok(())
    }

    async fn list_daily_counters(&self, limit: i64) -> StoreResult<Vec<Pageview>> {
        Self::check(&self.fail_pageviews)?;

        let tables = self.tables.lock().unwrap();
        Ok(tables
            .pageviews
            .iter()
            .rev()
            .take(limit as usize)
            .map(|(day, count)| Pageview {
                day: day.clone(),
                count: *count,
            })
            .collect())
    }
}
