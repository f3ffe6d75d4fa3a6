use axum::{
    Json,
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    services::{PageviewCounter, pageviews::today},
};

/// Path of the stats page, which never counts itself.
pub const STATS_PATH: &str = "/stats";

/// Daily pageviews for the last 100 days plus their sparkline.
pub async fn stats(
    State(pageviews): State<PageviewCounter>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(pageviews.summary().await?))
}

/// Axum Middleware: Pageview counting.
///
/// Runs the handler first, then records a visit for today when the response
/// was successful and was not the stats page. Recording runs on its own task,
/// so a slow or failing store never holds back the response.
pub async fn count_pageview(
    State(pageviews): State<PageviewCounter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let counted_path = req.uri().path() != STATS_PATH;
    let response = next.run(req).await;

    if counted_path && response.status().is_success() {
        let day = today();
        tokio::spawn(async move { pageviews.record_visit(&day).await });
    }

    response
}
