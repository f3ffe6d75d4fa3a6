use std::sync::Arc;

use url::Url;
use validator::Validate;

use crate::{
    error::{AppError, ValidationError},
    models::{
        comment::NewComment,
        post::{Feed, MAX_TEXT_LEN, NewPost, PAGE_SIZE, PostWithComments},
    },
    store::Store,
};

/// Shortest accepted post input, url and title together.
const MIN_POST_LEN: usize = 5;

/// Shortest accepted comment.
const MIN_COMMENT_LEN: usize = 3;

/// Link normalization rules.
#[derive(Debug, Clone)]
pub struct ContentPolicy {
    /// Scheme prefixed to links that have none, without "://".
    pub default_scheme: String,
    /// Reject links whose scheme differs from `default_scheme`.
    pub strict_scheme: bool,
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self {
            default_scheme: "gemini".to_string(),
            strict_scheme: false,
        }
    }
}

/// Validates and creates posts and comments, and reads them back.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn Store>,
    policy: ContentPolicy,
}

impl ContentService {
    pub fn new(store: Arc<dyn Store>, policy: ContentPolicy) -> Self {
        Self { store, policy }
    }

    /// Submit `"<url> <title>"` as a new post and return its id.
    /// Nothing reaches storage unless the input validates.
    pub async fn submit_post(&self, raw: &str) -> Result<i64, AppError> {
        let post = parse_post(raw, &self.policy)?;
        let id = self.store.create_post(&post).await?;
        Ok(id)
    }

    /// Attach a comment to `post_id`.
    pub async fn submit_comment(&self, post_id: i64, raw: &str) -> Result<(), AppError> {
        let comment = parse_comment(post_id, raw)?;
        self.store
            .create_comment(&comment)
            .await
            .map_err(|e| AppError::from_store(e, post_id))
    }

    /// A single post with its comments, oldest comment first.
    pub async fn get_post(&self, id: i64) -> Result<PostWithComments, AppError> {
        let (post, comments) = self
            .store
            .get_post(id)
            .await
            .map_err(|e| AppError::from_store(e, id))?;
        Ok(PostWithComments { post, comments })
    }

    /// One page of the feed, most recent posts first. `page` is 0-based.
    pub async fn get_feed(&self, page: i64) -> Result<Feed, AppError> {
        let offset = page
            .checked_mul(PAGE_SIZE)
            .filter(|offset| *offset >= 0)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid page '{}'", page)))?;

        let posts = self.store.list_feed(PAGE_SIZE, offset).await?;
        let has_next_page = posts.len() as i64 == PAGE_SIZE;

        Ok(Feed {
            page,
            posts,
            has_next_page,
        })
    }
}

/// Turns raw post input into a storable post, or the first reason it is not one.
pub fn parse_post(raw: &str, policy: &ContentPolicy) -> Result<NewPost, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    let input = raw.trim();
    if input.chars().count() < MIN_POST_LEN {
        return Err(ValidationError::TooShort);
    }

    // A link and a title are both required; a lone link is never reused as its own title.
    let (url, message) = match input.split_once(' ') {
        Some((url, message)) => (url.trim(), message.trim()),
        None => return Err(ValidationError::MissingTitle),
    };
    if message.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    if !url.contains('.') {
        return Err(ValidationError::NotAUrl);
    }

    let url = if url.contains("://") {
        url.to_string()
    } else {
        format!("{}://{}", policy.default_scheme, url)
    };

    if policy.strict_scheme {
        let parsed = Url::parse(&url).map_err(|_| ValidationError::NotAUrl)?;
        if !parsed.scheme().eq_ignore_ascii_case(&policy.default_scheme) {
            return Err(ValidationError::UnsupportedScheme(
                policy.default_scheme.clone(),
            ));
        }
    }

    let post = NewPost {
        url,
        message: message.to_string(),
    };
    post.validate()
        .map_err(|_| ValidationError::TooLong { max: MAX_TEXT_LEN })?;

    Ok(post)
}

/// Turns raw comment input into a storable comment.
pub fn parse_comment(post_id: i64, raw: &str) -> Result<NewComment, ValidationError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(ValidationError::MissingInput);
    }
    if message.chars().count() < MIN_COMMENT_LEN {
        return Err(ValidationError::CommentTooShort);
    }

    let comment = NewComment {
        post_id,
        message: message.to_string(),
    };
    comment
        .validate()
        .map_err(|_| ValidationError::TooLong { max: MAX_TEXT_LEN })?;

    Ok(comment)
}
