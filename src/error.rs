// src/error.rs

use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Why a user submission was rejected.
/// Every variant is recoverable: the caller asks the user to try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Cannot submit empty post, enter url and title separated by space")]
    MissingInput,

    #[error("Your post is too short, enter url and title separated by space")]
    TooShort,

    #[error("Cannot submit url without title, enter url and title separated by space")]
    MissingTitle,

    #[error("First part does not seem to be a url, enter url and title separated by space")]
    NotAUrl,

    #[error("Only {0}:// links are accepted")]
    UnsupportedScheme(String),

    #[error("Text is too long, keep it under {max} characters")]
    TooLong { max: usize },

    #[error("Your comment is too short, please check it")]
    CommentTooShort,
}

/// Global Application Error Enum.
/// Every core operation returns this; the HTTP adapter maps it to a response.
#[derive(Debug, Error)]
pub enum AppError {
    // 400 Bad Request, user-correctable
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // 400 Bad Request, malformed adapter input
    #[error("{0}")]
    BadRequest(String),

    // 404 Not Found
    #[error("Could not find post id '{0}'")]
    NotFound(i64),

    // 503 Service Unavailable; the storage detail stays in `source()`
    #[error("Service unavailable, please try again")]
    Unavailable(#[source] StoreError),
}

impl AppError {
    /// Maps a storage failure for a post lookup, keeping `NotFound` distinct.
    pub fn from_store(err: StoreError, post_id: i64) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound(post_id),
            err => AppError::Unavailable(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Unavailable(err)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path: {}", rejection.body_text());
        AppError::BadRequest("Invalid path".to_string())
    }
}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            err @ AppError::Unavailable(_) => {
                if let AppError::Unavailable(source) = &err {
                    tracing::error!("Storage unavailable: {}", source);
                }
                (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
            }
            AppError::Validation(reason) => (StatusCode::BAD_REQUEST, reason.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            err @ AppError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
