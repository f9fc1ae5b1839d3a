use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::error::route_not_found;
use crate::api::handlers::{health, increment_counter, list_counters, AppState};
use crate::store::CounterRepository;

/// Assemble the HTTP surface around a repository.
pub fn build_router(repo: Arc<dyn CounterRepository>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/counters", get(list_counters))
        .route("/api/counters/{id}/inc", post(increment_counter))
        .fallback(route_not_found)
        .with_state(AppState::new(repo))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
