//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Health check (intentionally unauthenticated for load balancers/k8s probes)
        .route("/api/health", get(handlers::health_check))
        // Create & list analyzed strings
        .route(
            "/api/strings",
            get(handlers::list_strings).post(handlers::create_string),
        )
        // Natural-language filtering. Static segment, so it must not be
        // shadowed by the value capture below.
        .route(
            "/api/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language),
        )
        // Exact-value lookup and deletion; the path segment is URL-decoded.
        .route(
            "/api/strings/{value}",
            get(handlers::get_string).delete(handlers::delete_string),
        );

    api_routes
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
