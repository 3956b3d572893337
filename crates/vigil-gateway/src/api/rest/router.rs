//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/phishing", post(handlers::phishing))
        .route("/security", post(handlers::security))
        .route("/test", get(handlers::test_status))
        .layer(DefaultBodyLimit::max(server.max_body_size))
        .layer(TraceLayer::new_for_http());

    if server.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
