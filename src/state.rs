use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    services::{ContentPolicy, ContentService, PageviewCounter},
    store::Store,
};

#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
    pub pageviews: PageviewCounter,
}

impl AppState {
    /// Wires both services to the same storage handle.
    pub fn new(store: Arc<dyn Store>, policy: ContentPolicy) -> Self {
        Self {
            content: ContentService::new(store.clone(), policy),
            pageviews: PageviewCounter::new(store),
        }
    }
}

impl FromRef<AppState> for ContentService {
    fn from_ref(state: &AppState) -> Self {
        state.content.clone()
    }
}

impl FromRef<AppState> for PageviewCounter {
    fn from_ref(state: &AppState) -> Self {
        state.pageviews.clone()
    }
}
