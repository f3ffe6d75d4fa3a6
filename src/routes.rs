// src/routes.rs

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{community, stats},
    state::AppState,
};

/// Assembles the application router.
///
/// * Feed, post and comment routes from `community`.
/// * The stats page.
/// * Global middleware: request tracing, then pageview counting.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(community::home))
        .route("/post", post(community::submit_post))
        .route("/s/{id}", get(community::show_post))
        .route("/c/{id}", post(community::submit_comment))
        .route(stats::STATS_PATH, get(stats::stats))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    stats::count_pageview,
                )),
        )
        .with_state(state)
}
