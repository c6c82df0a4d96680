//! HTTP routes, all under `/api`.

pub mod athletes;
pub mod health;
pub mod meets;
pub mod results;

use axum::{
    http::StatusCode,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::TeamRepository;
use crate::error::ApiError;
use crate::middleware::cors;

/// Store handle shared by every handler
pub type SharedRepository = Arc<dyn TeamRepository>;

/// Build the router over an injected repository.
pub fn create_router(repo: SharedRepository) -> Router {
    Router::new()
        .route("/api/health", any(health::health_check))
        .route("/api/hello", any(health::hello))
        .route(
            "/api/athletes",
            get(athletes::get_athletes)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/meets",
            get(meets::get_meets)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/results",
            get(results::get_results)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(axum::middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
