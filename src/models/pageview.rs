use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Number of days shown on the stats page.
pub const STATS_LIMIT: i64 = 100;

/// Represents the 'pageviews' table: one row per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Pageview {
    pub day: String,
    pub count: i64,
}

/// Daily visit counts, most recent day first, plus their sparkline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub pageviews: Vec<Pageview>,
    pub sparkline: String,
}
