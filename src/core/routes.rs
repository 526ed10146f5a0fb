// HTTP routes configuration

use crate::core::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::handlers::root::root_handler))
        .route("/about/{id}", get(crate::handlers::about::about_handler))
        .route("/reverse/{str}", get(crate::handlers::reverse::reverse_handler))
        // unmatched routes, including empty path segments
        .fallback(crate::handlers::fallback::fallback_handler)
        .with_state(state)
}
