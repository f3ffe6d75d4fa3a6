use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::comment::Comment;

/// Maximum length of the url and title columns.
pub const MAX_TEXT_LEN: usize = 1024;

/// Number of posts on one feed page.
pub const PAGE_SIZE: i64 = 30;

/// Represents the 'posts' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub url: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A post as listed in the feed: no comments, only their count.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: i64,
    pub url: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub comments_count: i64,
}

/// A single post together with its comments, oldest comment first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWithComments {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
}

impl PostWithComments {
    pub fn comments_count(&self) -> usize {
        self.comments.len()
    }
}

/// One page of the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feed {
    pub page: i64,
    pub posts: Vec<FeedPost>,
    /// A full page implies more may exist; this can be wrong by one
    /// phantom page when the feed ends exactly on a page boundary.
    pub has_next_page: bool,
}

/// A post that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewPost {
    #[validate(length(min = 1, max = 1024))]
    pub url: String,

    #[validate(length(min = 1, max = 1024))]
    pub message: String,
}

/// Query parameters for the feed.
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// 0-based page index (default: 0).
    pub page: Option<i64>,
}
