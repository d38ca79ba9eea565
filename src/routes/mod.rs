pub mod health;
pub mod search;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::db::Repository;
use crate::metrics;
use crate::services::AppState;

/// Maximum concurrent requests (backpressure control)
const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub fn create_router(state: AppState, repo: Repository) -> Router {
    let (prometheus_layer, metrics_router) = metrics::setup_metrics();

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/readiness", get(health::readiness_check))
        .with_state(repo);

    let api_routes = Router::new()
        .route("/search", get(search::search_grants))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .merge(metrics_router)
        .layer(
            ServiceBuilder::new()
                .layer(prometheus_layer)
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                // The inbound surface is open to browser clients.
                .layer(CorsLayer::permissive()),
        )
}
