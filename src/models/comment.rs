use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'comments' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A comment that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewComment {
    pub post_id: i64,

    #[validate(length(min = 3, max = 1024))]
    pub message: String,
}
