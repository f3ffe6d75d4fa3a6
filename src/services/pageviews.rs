use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    error::AppError,
    models::pageview::{Pageview, STATS_LIMIT, Stats},
    store::Store,
    utils::sparkline,
};

/// Best-effort daily visit counter.
#[derive(Clone)]
pub struct PageviewCounter {
    store: Arc<dyn Store>,
}

impl PageviewCounter {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Counts one visit for `day`.
    /// Failures are logged and swallowed; a visit never fails the request that caused it.
    pub async fn record_visit(&self, day: &str) {
        if let Err(e) = self.store.upsert_daily_counter(day).await {
            tracing::warn!(day, error = %e, "failed to record pageview");
        }
    }

    /// Up to `limit` days, most recent first.
    pub async fn get_stats(&self, limit: i64) -> Result<Vec<Pageview>, AppError> {
        Ok(self.store.list_daily_counters(limit).await?)
    }

    /// The last [`STATS_LIMIT`] days with their sparkline.
    pub async fn summary(&self) -> Result<Stats, AppError> {
        let pageviews = self.get_stats(STATS_LIMIT).await?;
        let counts: Vec<i64> = pageviews.iter().map(|p| p.count).collect();
        let sparkline = sparkline::render(&counts);
        Ok(Stats {
            pageviews,
            sparkline,
        })
    }
}

/// Day key used by the counter, e.g. "2024-01-31".
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Day key for the server's current local date.
pub fn today() -> String {
    day_key(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(day_key(date), "2024-01-05");
    }
}
