use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::AppError,
    models::{
        comment::Comment,
        post::{FeedParams, FeedPost, PostWithComments},
    },
    services::ContentService,
    utils::ago::ago,
};

#[derive(Debug, Serialize)]
struct FeedItem {
    #[serde(flatten)]
    post: FeedPost,
    ago: String,
}

#[derive(Debug, Serialize)]
struct CommentItem {
    #[serde(flatten)]
    comment: Comment,
    ago: String,
}

fn post_view(post: PostWithComments, now: DateTime<Utc>) -> serde_json::Value {
    let comments_count = post.comments_count();
    let PostWithComments { post, comments } = post;
    let comments: Vec<CommentItem> = comments
        .into_iter()
        .map(|comment| CommentItem {
            ago: ago(comment.created_at, now),
            comment,
        })
        .collect();

    serde_json::json!({
        "id": post.id,
        "url": post.url,
        "message": post.message,
        "created_at": post.created_at,
        "ago": ago(post.created_at, now),
        "comments_count": comments_count,
        "comments": comments,
    })
}

/// Home feed, most recent first.
/// `?page=N` is 0-based; `next_page` is only set when the page came back full.
pub async fn home(
    State(content): State<ContentService>,
    Query(params): Query<FeedParams>,
) -> Result<impl IntoResponse, AppError> {
    let feed = content.get_feed(params.page.unwrap_or(0)).await?;
    let now = Utc::now();

    let posts: Vec<FeedItem> = feed
        .posts
        .into_iter()
        .map(|post| FeedItem {
            ago: ago(post.created_at, now),
            post,
        })
        .collect();

    Ok(Json(serde_json::json!({
        "page": feed.page,
        "posts": posts,
        "has_next_page": feed.has_next_page,
        "next_page": feed.has_next_page.then_some(feed.page + 1),
    })))
}

/// Submit a post. The body is the raw `"<url> <title>"` text.
pub async fn submit_post(
    State(content): State<ContentService>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let post_id = content.submit_post(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": post_id, "location": format!("/s/{}", post_id) })),
    ))
}

/// Show a post with its comments.
pub async fn show_post(
    State(content): State<ContentService>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let post = content.get_post(id).await?;
    Ok(Json(post_view(post, Utc::now())))
}

/// Comment on a post. The body is the raw comment text.
pub async fn submit_comment(
    State(content): State<ContentService>,
    path: Result<Path<i64>, PathRejection>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let Path(post_id) = path?;
    content.submit_comment(post_id, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "location": format!("/s/{}", post_id) })),
    ))
}
